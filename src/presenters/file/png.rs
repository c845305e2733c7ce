use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::controllers::ports::grid_encoder::GridEncoder;
use crate::core::data::pixel_grid::PixelGrid;
use crate::presenters::errors::EncodeError;

#[derive(Debug, Clone, Copy, Default)]
pub struct PngGridEncoder {}

impl GridEncoder for PngGridEncoder {
    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn file_extension(&self) -> &'static str {
        "png"
    }

    fn encode(&self, grid: &PixelGrid) -> Result<Vec<u8>, EncodeError> {
        // PNG has no representation for zero-sized images.
        if grid.is_empty() {
            return Err(EncodeError::EmptyGrid {
                width: grid.width(),
                height: grid.height(),
                format: "png",
            });
        }

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            grid.buffer(),
            grid.width(),
            grid.height(),
            ExtendedColorType::Rgb8,
        )?;

        Ok(bytes)
    }
}

impl PngGridEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
