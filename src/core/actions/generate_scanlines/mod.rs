pub mod generate_scanlines_rayon;
pub mod ports;
