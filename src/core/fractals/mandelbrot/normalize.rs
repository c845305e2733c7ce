use std::fmt::Display;
use std::str::FromStr;

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::ParamsError;
use crate::core::fractals::mandelbrot::palette::PaletteVariant;
use crate::core::fractals::mandelbrot::params::{
    DEFAULT_CENTER, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, DEFAULT_ZOOM,
    RenderRequest,
};

/// Render parameters as they arrive from a transport: any field may be
/// missing, and present fields are unparsed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRenderParams {
    pub width: Option<String>,
    pub height: Option<String>,
    pub center_x: Option<String>,
    pub center_y: Option<String>,
    pub zoom: Option<String>,
    pub palette: Option<String>,
    pub max_iterations: Option<String>,
}

impl RawRenderParams {
    /// Fills every field of `self` that is unset from `fallback`.
    #[must_use]
    pub fn or(self, fallback: RawRenderParams) -> Self {
        Self {
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
            center_x: self.center_x.or(fallback.center_x),
            center_y: self.center_y.or(fallback.center_y),
            zoom: self.zoom.or(fallback.zoom),
            palette: self.palette.or(fallback.palette),
            max_iterations: self.max_iterations.or(fallback.max_iterations),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_or<T>(name: &'static str, value: &Option<String>, default: T) -> Result<T, ParamsError>
where
    T: FromStr,
    T::Err: Display,
{
    match present(value) {
        None => Ok(default),
        Some(text) => text
            .parse()
            .map_err(|err| ParamsError::invalid(name, format!("cannot parse '{text}': {err}"))),
    }
}

/// Falls back to the default palette on anything unrecognised.
#[must_use]
pub fn normalize_palette(value: Option<&str>) -> PaletteVariant {
    let Some(token) = value else {
        return PaletteVariant::default();
    };

    token.parse().unwrap_or_else(|err| {
        tracing::debug!(%err, "falling back to default palette");
        PaletteVariant::default()
    })
}

/// Turns raw transport parameters into a validated [`RenderRequest`].
///
/// Missing or blank fields take their documented defaults. Malformed numbers
/// and values that would make the viewport degenerate are rejected with
/// [`ParamsError::InvalidParameter`]; an unknown palette is not an error.
pub fn normalize(raw: &RawRenderParams) -> Result<RenderRequest, ParamsError> {
    let width = parse_or("width", &raw.width, DEFAULT_WIDTH)?;
    let height = parse_or("height", &raw.height, DEFAULT_HEIGHT)?;
    let center_x = parse_or("centerX", &raw.center_x, DEFAULT_CENTER.real)?;
    let center_y = parse_or("centerY", &raw.center_y, DEFAULT_CENTER.imag)?;
    let zoom = parse_or("zoom", &raw.zoom, DEFAULT_ZOOM)?;
    let max_iterations = parse_or("maxIterations", &raw.max_iterations, DEFAULT_MAX_ITERATIONS)?;
    let palette = normalize_palette(present(&raw.palette));

    RenderRequest::new(
        width,
        height,
        Complex::new(center_x, center_y),
        zoom,
        palette,
        max_iterations,
    )
}
