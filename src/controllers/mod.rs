pub mod ports;
pub mod query_params;
pub mod render_image;
