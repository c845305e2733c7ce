pub mod assemble_pixel_grid;
pub mod cancellation;
pub mod generate_scanlines;
pub mod render_mandelbrot;
