use crate::core::fractals::mandelbrot::params::RenderRequest;

pub const DEFAULT_MAX_PIXELS: u64 = 100_000_000;
pub const DEFAULT_MAX_ITERATIONS_LIMIT: u32 = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitExceeded {
    #[error("{width}x{height} image has {pixels} pixels, limit is {max_pixels}")]
    TooManyPixels {
        width: u32,
        height: u32,
        pixels: u64,
        max_pixels: u64,
    },

    #[error("{max_iterations} iterations requested, limit is {limit}")]
    TooManyIterations { max_iterations: u32, limit: u32 },
}

/// Upper bounds on the work a single render may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    pub max_pixels: u64,
    pub max_iterations: u32,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_pixels: DEFAULT_MAX_PIXELS,
            max_iterations: DEFAULT_MAX_ITERATIONS_LIMIT,
        }
    }
}

/// Work a render costs in pixels. An empty row or column still costs one
/// pixel, since every row is scheduled and tracked even when it has no width.
fn scheduled_pixels(request: &RenderRequest) -> u64 {
    u64::from(request.width().max(1)) * u64::from(request.height().max(1))
}

impl RenderLimits {
    pub fn check(&self, request: &RenderRequest) -> Result<(), LimitExceeded> {
        let pixels = scheduled_pixels(request);
        if pixels > self.max_pixels {
            return Err(LimitExceeded::TooManyPixels {
                width: request.width(),
                height: request.height(),
                pixels,
                max_pixels: self.max_pixels,
            });
        }

        if request.max_iterations() > self.max_iterations {
            return Err(LimitExceeded::TooManyIterations {
                max_iterations: request.max_iterations(),
                limit: self.max_iterations,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::mandelbrot::palette::PaletteVariant;

    fn request(width: u32, height: u32, max_iterations: u32) -> RenderRequest {
        RenderRequest::new(
            width,
            height,
            Complex::ZERO,
            1.0,
            PaletteVariant::Sol,
            max_iterations,
        )
        .unwrap()
    }

    #[test]
    fn default_limits_accept_default_request() {
        assert_eq!(RenderLimits::default().check(&RenderRequest::default()), Ok(()));
    }

    #[test]
    fn rejects_too_many_pixels() {
        let limits = RenderLimits {
            max_pixels: 100,
            max_iterations: 10,
        };

        assert_eq!(
            limits.check(&request(11, 10, 5)),
            Err(LimitExceeded::TooManyPixels {
                width: 11,
                height: 10,
                pixels: 110,
                max_pixels: 100
            })
        );
        assert_eq!(limits.check(&request(10, 10, 5)), Ok(()));
    }

    #[test]
    fn rejects_too_many_iterations() {
        let limits = RenderLimits {
            max_pixels: 100,
            max_iterations: 10,
        };

        assert_eq!(
            limits.check(&request(1, 1, 11)),
            Err(LimitExceeded::TooManyIterations {
                max_iterations: 11,
                limit: 10
            })
        );
    }

    #[test]
    fn zero_width_still_counts_rows() {
        let limits = RenderLimits::default();

        assert_eq!(
            limits.check(&request(0, u32::MAX, 1)),
            Err(LimitExceeded::TooManyPixels {
                width: 0,
                height: u32::MAX,
                pixels: u64::from(u32::MAX),
                max_pixels: DEFAULT_MAX_PIXELS
            })
        );
        assert!(limits.check(&request(u32::MAX, 0, 1)).is_err());
    }

    #[test]
    fn zero_sized_within_limits_is_accepted() {
        let limits = RenderLimits {
            max_pixels: 100,
            max_iterations: 10,
        };

        assert_eq!(limits.check(&request(0, 100, 5)), Ok(()));
        assert_eq!(limits.check(&request(0, 0, 5)), Ok(()));
        assert!(limits.check(&request(0, 101, 5)).is_err());
    }

    #[test]
    fn pixel_count_does_not_overflow() {
        let limits = RenderLimits::default();

        assert!(limits.check(&request(u32::MAX, u32::MAX, 1)).is_err());
    }
}
