use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::ParamsError;
use crate::core::fractals::mandelbrot::palette::PaletteVariant;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;
pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;

/// Smallest accepted zoom; below it the viewport spans so much of the plane
/// that every pixel escapes on the first iteration.
pub const MIN_ZOOM: f64 = 1e-9;

/// A fully validated description of one render.
///
/// Every field is checked on construction, so the evaluator and colour
/// mapper can rely on a non-degenerate viewport and a non-zero iteration cap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    width: u32,
    height: u32,
    center: Complex,
    zoom: f64,
    palette: PaletteVariant,
    max_iterations: u32,
}

impl RenderRequest {
    pub fn new(
        width: u32,
        height: u32,
        center: Complex,
        zoom: f64,
        palette: PaletteVariant,
        max_iterations: u32,
    ) -> Result<Self, ParamsError> {
        if !center.is_finite() {
            let name = if center.real.is_finite() { "centerY" } else { "centerX" };
            return Err(ParamsError::invalid(name, "must be a finite number"));
        }

        if !zoom.is_finite() || zoom < MIN_ZOOM {
            return Err(ParamsError::invalid(
                "zoom",
                format!("must be a finite number of at least {MIN_ZOOM}, got {zoom}"),
            ));
        }

        if max_iterations == 0 {
            return Err(ParamsError::invalid(
                "maxIterations",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            width,
            height,
            center,
            zoom,
            palette,
            max_iterations,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn palette(&self) -> PaletteVariant {
        self.palette
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            palette: PaletteVariant::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
