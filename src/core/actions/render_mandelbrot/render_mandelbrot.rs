use std::error::Error;
use std::time::Instant;

use crate::core::actions::assemble_pixel_grid::assemble_pixel_grid::{
    AssemblePixelGridError, PixelGridAssembler,
};
use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_scanlines::generate_scanlines_rayon::{
    GenerateScanlinesError, generate_scanlines_cancelable,
};
use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::limits::{LimitExceeded, RenderLimits};
use crate::core::fractals::mandelbrot::params::RenderRequest;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render exceeds resource limits: {0}")]
    ResourceExhausted(#[from] LimitExceeded),

    #[error("out of memory for image: {0}")]
    OutOfMemory(#[source] PixelGridError),

    #[error("row {row} failed: {source}")]
    RowComputationFailed {
        row: u32,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    #[error("failed to assemble image: {0}")]
    Assembly(#[source] AssemblePixelGridError),
}

impl RenderError {
    /// True when the render was refused or aborted for lack of memory or time
    /// budget. Such renders may succeed if re-issued later or made smaller.
    #[must_use]
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted(_) | Self::OutOfMemory(_))
    }
}

impl From<GenerateScanlinesError> for RenderError {
    fn from(err: GenerateScanlinesError) -> Self {
        match err {
            GenerateScanlinesError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GenerateScanlinesError::RowFailed { row, source } => {
                Self::RowComputationFailed { row, source }
            }
        }
    }
}

impl From<AssemblePixelGridError> for RenderError {
    fn from(err: AssemblePixelGridError) -> Self {
        match err {
            AssemblePixelGridError::PixelGrid(
                grid_err @ (PixelGridError::TooLarge { .. } | PixelGridError::Allocation(_)),
            ) => Self::OutOfMemory(grid_err),
            other => Self::Assembly(other),
        }
    }
}

/// Renders Mandelbrot images within a fixed set of [`RenderLimits`].
///
/// Holds no state between calls; one value can serve any number of renders,
/// from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MandelbrotRenderer {
    limits: RenderLimits,
}

impl MandelbrotRenderer {
    #[must_use]
    pub fn new(limits: RenderLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub fn limits(&self) -> RenderLimits {
        self.limits
    }

    pub fn render(&self, request: &RenderRequest) -> Result<PixelGrid, RenderError> {
        self.render_cancelable(request, &NeverCancel)
    }

    /// Renders `request`, giving up with [`RenderError::Cancelled`] once
    /// `cancel` reports cancellation.
    ///
    /// The grid is allocated before any row is computed, so an image that
    /// cannot fit in memory fails before spending CPU time on it.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(width = request.width(), height = request.height())
    )]
    pub fn render_cancelable<C: CancelToken>(
        &self,
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<PixelGrid, RenderError> {
        self.limits.check(request)?;

        tracing::info!(
            width = request.width(),
            height = request.height(),
            center_x = request.center().real,
            center_y = request.center().imag,
            zoom = request.zoom(),
            palette = %request.palette(),
            max_iterations = request.max_iterations(),
            "generating fractal"
        );

        let start = Instant::now();
        let assembler = PixelGridAssembler::new(request.width(), request.height())?;

        let algorithm = MandelbrotAlgorithm::new(*request);
        let colour_map = MandelbrotColourMap::new(request.palette(), request.max_iterations());
        let scanlines = generate_scanlines_cancelable(
            request.width(),
            request.height(),
            &algorithm,
            &colour_map,
            cancel,
        )?;

        let grid = assembler.assemble(scanlines)?;

        tracing::debug!(elapsed = ?start.elapsed(), "fractal generated");

        Ok(grid)
    }
}

/// Renders with the default [`RenderLimits`].
pub fn render(request: &RenderRequest) -> Result<PixelGrid, RenderError> {
    MandelbrotRenderer::default().render(request)
}
