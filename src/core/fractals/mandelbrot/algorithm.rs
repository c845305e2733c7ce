use crate::core::actions::generate_scanlines::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::params::RenderRequest;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Where an orbit stopped: the iteration count and the last value of `z`.
///
/// Points known to be interior report `max_iterations` with `z` at zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationResult {
    pub iterations: u32,
    pub z: Complex,
}

/// Closed-form membership test for the main cardioid and the period-2 bulb.
#[must_use]
pub fn is_known_interior(c: Complex) -> bool {
    let x = c.real - 0.25;
    let y_squared = c.imag * c.imag;
    let q = x * x + y_squared;

    if q * (q + x) < 0.25 * y_squared {
        return true;
    }

    let x_plus_1 = c.real + 1.0;

    x_plus_1 * x_plus_1 + y_squared < 0.0625
}

/// Iterates `z <- z^2 + c` from zero until `|z|^2 >= 4` or the cap is hit.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> IterationResult {
    if is_known_interior(c) {
        return IterationResult {
            iterations: max_iterations,
            z: Complex::ZERO,
        };
    }

    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        z = z * z + c;
        iterations += 1;
    }

    IterationResult { iterations, z }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    request: RenderRequest,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = IterationResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, &self.request)?;

        Ok(escape_time(c, self.request.max_iterations()))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(request: RenderRequest) -> Self {
        Self { request }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::palette::PaletteVariant;

    #[test]
    fn test_origin_is_interior() {
        assert!(is_known_interior(Complex::ZERO));
        assert!(is_known_interior(Complex::new(-0.5, 0.0)));
    }

    #[test]
    fn test_period_two_bulb_is_interior() {
        assert!(is_known_interior(Complex::new(-1.0, 0.0)));
        assert!(is_known_interior(Complex::new(-1.1, 0.1)));
    }

    #[test]
    fn test_points_outside_shortcut_regions() {
        assert!(!is_known_interior(Complex::new(0.5, 0.0)));
        assert!(!is_known_interior(Complex::new(-1.5, 0.0)));
        assert!(!is_known_interior(Complex::new(-2.5, -2.0)));
    }

    #[test]
    fn test_interior_point_reaches_cap_without_iterating() {
        let result = escape_time(Complex::new(-0.1, 0.1), 1000);

        assert_eq!(result.iterations, 1000);
        assert_eq!(result.z, Complex::ZERO);
    }

    #[test]
    fn test_far_point_escapes_after_one_iteration() {
        let result = escape_time(Complex::new(-2.5, -2.0), 50);

        assert_eq!(result.iterations, 1);
        assert_eq!(result.z, Complex::new(-2.5, -2.0));
    }

    #[test]
    fn test_escape_counts_until_radius_reached() {
        // 0.5 + i: z1 = 0.5 + i, z2 = -0.25 + 2i, |z2|^2 > 4
        let result = escape_time(Complex::new(0.5, 1.0), 50);

        assert_eq!(result.iterations, 2);
        assert_eq!(result.z, Complex::new(-0.25, 2.0));
    }

    #[test]
    fn test_member_outside_shortcuts_hits_cap() {
        // -1.5 lies on the real segment of the set but in neither shortcut region.
        let result = escape_time(Complex::new(-1.5, 0.0), 50);

        assert_eq!(result.iterations, 50);
        assert!(result.z.magnitude_squared() < 4.0);
    }

    #[test]
    fn test_escaped_orbit_is_outside_radius() {
        let result = escape_time(Complex::new(0.3, 0.6), 500);

        assert!(result.iterations < 500);
        assert!(result.z.magnitude_squared() >= 4.0);
    }

    #[test]
    fn test_compute_maps_pixel_then_iterates() {
        let request =
            RenderRequest::new(4, 4, Complex::new(-0.5, 0.0), 1.0, PaletteVariant::Sol, 50)
                .unwrap();
        let algorithm = MandelbrotAlgorithm::new(request);

        let center = algorithm.compute(Point { x: 2, y: 2 }).unwrap();
        let corner = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(center.iterations, 50);
        assert_eq!(corner.iterations, 1);
    }

    #[test]
    fn test_compute_rejects_pixel_outside_grid() {
        let request = RenderRequest::new(4, 4, Complex::ZERO, 1.0, PaletteVariant::Sol, 50)
            .unwrap();
        let algorithm = MandelbrotAlgorithm::new(request);

        assert!(algorithm.compute(Point { x: 4, y: 0 }).is_err());
    }
}
