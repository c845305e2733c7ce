use crate::controllers::ports::grid_encoder::GridEncoder;
use crate::controllers::query_params::parse_query;
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::render_mandelbrot::render_mandelbrot::{MandelbrotRenderer, RenderError};
use crate::core::fractals::mandelbrot::errors::ParamsError;
use crate::core::fractals::mandelbrot::normalize::{RawRenderParams, normalize};
use crate::presenters::errors::EncodeError;

#[derive(Debug, thiserror::Error)]
pub enum RenderImageError {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl RenderImageError {
    /// True when the caller sent parameters that can never render, as
    /// opposed to a render that failed or was refused for its size.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Params(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResponse {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Turns raw request parameters into an encoded image.
pub struct RenderImageController<E: GridEncoder> {
    renderer: MandelbrotRenderer,
    encoder: E,
}

impl<E: GridEncoder> RenderImageController<E> {
    pub fn new(renderer: MandelbrotRenderer, encoder: E) -> Self {
        Self { renderer, encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn handle(&self, raw: &RawRenderParams) -> Result<ImageResponse, RenderImageError> {
        self.handle_cancelable(raw, &NeverCancel)
    }

    pub fn handle_query(&self, query: &str) -> Result<ImageResponse, RenderImageError> {
        self.handle(&parse_query(query))
    }

    pub fn handle_cancelable<C: CancelToken>(
        &self,
        raw: &RawRenderParams,
        cancel: &C,
    ) -> Result<ImageResponse, RenderImageError> {
        let request = normalize(raw)?;
        let grid = self.renderer.render_cancelable(&request, cancel)?;
        let bytes = self.encoder.encode(&grid)?;

        tracing::debug!(
            content_type = self.encoder.content_type(),
            bytes = bytes.len(),
            "image encoded"
        );

        Ok(ImageResponse {
            content_type: self.encoder.content_type(),
            bytes,
        })
    }
}
