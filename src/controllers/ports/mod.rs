pub mod grid_encoder;
