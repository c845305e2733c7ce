use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::params::RenderRequest;

/// Width and height of the visible complex-plane square at zoom 1.
pub const BASE_RANGE: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum PixelToComplexCoordsError {
    #[error("point (x: {}, y: {}) is outside the {width}x{height} grid", .point.x, .point.y)]
    PointOutsideGrid {
        point: Point,
        width: u32,
        height: u32,
    },
}

/// Maps a pixel to the complex plane.
///
/// The viewport is a square of side `4 / zoom` centred on the request's
/// centre, stretched over the grid. Pixel `(width / 2, height / 2)` lands
/// exactly on the centre.
pub fn pixel_to_complex_coords(
    pixel: Point,
    request: &RenderRequest,
) -> Result<Complex, PixelToComplexCoordsError> {
    let width = request.width();
    let height = request.height();

    if pixel.x >= width || pixel.y >= height {
        return Err(PixelToComplexCoordsError::PointOutsideGrid {
            point: pixel,
            width,
            height,
        });
    }

    let range_x = BASE_RANGE / request.zoom();
    let range_y = BASE_RANGE / request.zoom();
    let width = f64::from(width);
    let height = f64::from(height);
    let center = request.center();

    let real = center.real + (f64::from(pixel.x) - width / 2.0) * range_x / width;
    let imag = center.imag + (f64::from(pixel.y) - height / 2.0) * range_y / height;

    Ok(Complex { real, imag })
}
