use crate::core::data::pixel_grid::PixelGrid;
use crate::presenters::errors::EncodeError;

pub trait GridEncoder: Send + Sync {
    /// MIME type of the bytes produced by [`GridEncoder::encode`].
    fn content_type(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;

    fn encode(&self, grid: &PixelGrid) -> Result<Vec<u8>, EncodeError>;
}

impl GridEncoder for Box<dyn GridEncoder> {
    fn content_type(&self) -> &'static str {
        (**self).content_type()
    }

    fn file_extension(&self) -> &'static str {
        (**self).file_extension()
    }

    fn encode(&self, grid: &PixelGrid) -> Result<Vec<u8>, EncodeError> {
        (**self).encode(grid)
    }
}
