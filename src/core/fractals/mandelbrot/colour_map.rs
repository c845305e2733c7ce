use std::f64::consts::LN_2;

use crate::core::actions::generate_scanlines::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::IterationResult;
use crate::core::fractals::mandelbrot::errors::ColourMapError;
use crate::core::fractals::mandelbrot::palette::PaletteVariant;
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

/// Colour given to points that never escaped, whatever the palette.
pub const INTERIOR_COLOUR: Colour = Colour::BLACK;

/// Fractional iteration count used to avoid colour banding.
///
/// Only meaningful for orbits that escaped, i.e. `|z|^2 >= 4`.
#[must_use]
pub fn continuous_index(result: &IterationResult) -> f64 {
    let log_zn = result.z.magnitude_squared().ln() / 2.0;
    let nu = (log_zn / LN_2).ln() / LN_2;

    f64::from(result.iterations) + 1.0 - nu
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotColourMap {
    palette: PaletteVariant,
    max_iterations: u32,
}

impl ColourMap for MandelbrotColourMap {
    type T = IterationResult;
    type Failure = ColourMapError;

    fn map(&self, result: IterationResult) -> Result<Colour, Self::Failure> {
        if result.iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations: result.iterations,
                max_iterations: self.max_iterations,
            });
        }

        if result.iterations == self.max_iterations {
            return Ok(INTERIOR_COLOUR);
        }

        let t = (continuous_index(&result) / f64::from(self.max_iterations)) as f32;
        let (hue, saturation, brightness) = self.palette.curve().hsb(t);

        Ok(hsb_to_rgb(hue, saturation, brightness))
    }
}

impl MandelbrotColourMap {
    #[must_use]
    pub fn new(palette: PaletteVariant, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }

    #[must_use]
    pub fn palette(&self) -> PaletteVariant {
        self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn escaped(iterations: u32, real: f64, imag: f64) -> IterationResult {
        IterationResult {
            iterations,
            z: Complex::new(real, imag),
        }
    }

    #[test]
    fn test_interior_is_black_for_every_palette() {
        let interior = IterationResult {
            iterations: 100,
            z: Complex::ZERO,
        };

        for &palette in PaletteVariant::ALL {
            let mapper = MandelbrotColourMap::new(palette, 100);
            assert_eq!(mapper.map(interior).unwrap(), INTERIOR_COLOUR);
        }
    }

    #[test]
    fn test_iterations_above_max_fail() {
        let mapper = MandelbrotColourMap::new(PaletteVariant::Sol, 10);
        let result = mapper.map(escaped(11, 3.0, 0.0));

        assert_eq!(
            result,
            Err(ColourMapError::IterationsExceedMax {
                iterations: 11,
                max_iterations: 10
            })
        );
    }

    #[test]
    fn test_continuous_index_at_escape_radius() {
        // |z| = 2 gives nu = 0, so the index is exactly iterations + 1.
        let index = continuous_index(&escaped(7, 2.0, 0.0));

        assert!((index - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_continuous_index_decreases_with_larger_escape() {
        let near = continuous_index(&escaped(5, 2.0, 0.1));
        let far = continuous_index(&escaped(5, 20.0, 0.0));

        assert!(far < near);
    }

    #[test]
    fn test_escaped_points_are_never_black() {
        for &palette in PaletteVariant::ALL {
            let mapper = MandelbrotColourMap::new(palette, 50);
            for iterations in 0..50 {
                let colour = mapper.map(escaped(iterations, 2.5, -1.0)).unwrap();
                assert!(!colour.is_black(), "{} at {} was black", palette, iterations);
            }
        }
    }

    #[test]
    fn test_sol_corner_colour() {
        // First iteration escape at c = -2.5 - 2i: t ~ 0.02506, hue ~ 0.7264 lands
        // in the blue-to-magenta sector.
        let mapper = MandelbrotColourMap::new(PaletteVariant::Sol, 50);
        let colour = mapper.map(escaped(1, -2.5, -2.0)).unwrap();

        assert_eq!(colour.b, 255);
        assert!(colour.r > colour.g);
        assert!((100..=108).contains(&colour.r), "red was {}", colour.r);
        assert!((15..=24).contains(&colour.g), "green was {}", colour.g);
    }

    #[test]
    fn test_palettes_differ() {
        let result = escaped(3, 2.5, 1.0);
        let sol = MandelbrotColourMap::new(PaletteVariant::Sol, 64).map(result).unwrap();
        let sunrise = MandelbrotColourMap::new(PaletteVariant::Sunrise, 64)
            .map(result)
            .unwrap();
        let dark = MandelbrotColourMap::new(PaletteVariant::Dark, 64).map(result).unwrap();

        assert_ne!(sol, sunrise);
        assert_ne!(sol, dark);
        assert_ne!(sunrise, dark);
    }

    #[test]
    fn test_dark_palette_is_dim() {
        let mapper = MandelbrotColourMap::new(PaletteVariant::Dark, 1000);
        let colour = mapper.map(escaped(2, 2.2, 0.0)).unwrap();
        let max = colour.r.max(colour.g).max(colour.b);

        // Brightness stays below 0.7 for this palette.
        assert!(max <= 179, "dark palette produced {:?}", colour);
    }
}
