use std::io::Write;

use crate::controllers::ports::grid_encoder::GridEncoder;
use crate::core::data::pixel_grid::PixelGrid;
use crate::presenters::errors::EncodeError;

#[derive(Debug, Clone, Copy, Default)]
pub struct PpmGridEncoder {}

impl GridEncoder for PpmGridEncoder {
    fn content_type(&self) -> &'static str {
        "image/x-portable-pixmap"
    }

    fn file_extension(&self) -> &'static str {
        "ppm"
    }

    fn encode(&self, grid: &PixelGrid) -> Result<Vec<u8>, EncodeError> {
        let mut bytes = Vec::with_capacity(grid.buffer().len() + 32);

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(bytes, "P6")?;
        writeln!(bytes, "{} {}", grid.width(), grid.height())?;
        writeln!(bytes, "255")?;
        bytes.extend_from_slice(grid.buffer());

        Ok(bytes)
    }
}

impl PpmGridEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
