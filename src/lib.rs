mod controllers;
mod core;
mod presenters;

pub use crate::controllers::ports::grid_encoder::GridEncoder;
pub use crate::controllers::query_params::parse_query;
pub use crate::controllers::render_image::{ImageResponse, RenderImageController, RenderImageError};

pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_scanlines::ports::colour_map::ColourMap;
pub use crate::core::actions::render_mandelbrot::render_mandelbrot::{
    MandelbrotRenderer, RenderError, render,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_grid::PixelGrid;
pub use crate::core::fractals::mandelbrot::algorithm::{IterationResult, escape_time};
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
pub use crate::core::fractals::mandelbrot::errors::ParamsError;
pub use crate::core::fractals::mandelbrot::limits::{LimitExceeded, RenderLimits};
pub use crate::core::fractals::mandelbrot::normalize::{RawRenderParams, normalize};
pub use crate::core::fractals::mandelbrot::palette::PaletteVariant;
pub use crate::core::fractals::mandelbrot::params::RenderRequest;

pub use crate::presenters::errors::EncodeError;
pub use crate::presenters::factory::{GridEncoderKind, grid_encoder_factory};
pub use crate::presenters::file::png::PngGridEncoder;
pub use crate::presenters::file::ppm::PpmGridEncoder;
