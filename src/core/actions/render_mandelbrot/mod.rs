pub mod render_mandelbrot;
