#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot encode an empty {width}x{height} image as {format}")]
    EmptyGrid {
        width: u32,
        height: u32,
        format: &'static str,
    },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
