use crate::core::data::colour::Colour;
use std::collections::TryReserveError;

pub type PixelGridData = Vec<u8>;

const BYTES_PER_PIXEL: usize = 3;

fn grid_to_buffer_size(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PixelGridError {
    #[error("grid of {width}x{height} pixels does not fit in memory")]
    TooLarge { width: u32, height: u32 },

    #[error("failed to allocate pixel grid: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("grid size {grid_size} does not match buffer size {buffer_size}")]
    BoundsMismatch { grid_size: usize, buffer_size: usize },

    #[error("row {row} outside of grid with height {height}")]
    RowOutsideBounds { row: u32, height: u32 },

    #[error("row {row} has {actual} pixels, grid width is {expected}")]
    RowWidthMismatch {
        row: u32,
        expected: u32,
        actual: usize,
    },
}

/// Row-major RGB pixel storage, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    buffer: PixelGridData,
}

impl PixelGrid {
    /// Allocates a black grid, reporting allocation failure instead of aborting.
    pub fn try_new(width: u32, height: u32) -> Result<Self, PixelGridError> {
        let total_bytes =
            grid_to_buffer_size(width, height).ok_or(PixelGridError::TooLarge { width, height })?;

        let mut buffer = PixelGridData::new();
        buffer.try_reserve_exact(total_bytes)?;
        buffer.resize(total_bytes, 0);

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelGridData,
    ) -> Result<Self, PixelGridError> {
        let grid_size =
            grid_to_buffer_size(width, height).ok_or(PixelGridError::TooLarge { width, height })?;

        if grid_size != buffer.len() {
            return Err(PixelGridError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len() / BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let rgb = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some(Colour::new(rgb[0], rgb[1], rgb[2]))
    }

    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }

        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * row_bytes;

        Some(&self.buffer[start..start + row_bytes])
    }

    pub(crate) fn set_row(&mut self, y: u32, pixels: &[Colour]) -> Result<(), PixelGridError> {
        if y >= self.height {
            return Err(PixelGridError::RowOutsideBounds {
                row: y,
                height: self.height,
            });
        }

        if pixels.len() != self.width as usize {
            return Err(PixelGridError::RowWidthMismatch {
                row: y,
                expected: self.width,
                actual: pixels.len(),
            });
        }

        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * row_bytes;
        let row = &mut self.buffer[start..start + row_bytes];

        for (chunk, colour) in row.chunks_exact_mut(BYTES_PER_PIXEL).zip(pixels) {
            chunk.copy_from_slice(&<[u8; 3]>::from(*colour));
        }

        Ok(())
    }
}
