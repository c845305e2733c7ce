use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
use crate::core::data::scanline::Scanline;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssemblePixelGridError {
    #[error(transparent)]
    PixelGrid(#[from] PixelGridError),

    #[error("row {row} was produced more than once")]
    DuplicateRow { row: u32 },

    #[error("{missing} of {height} rows were never produced")]
    MissingRows { missing: u32, height: u32 },
}

/// Collects scanlines into a grid allocated up front.
///
/// Rows may be placed in any order. The grid is handed back only when each
/// row has been placed exactly once.
#[derive(Debug)]
pub struct PixelGridAssembler {
    grid: PixelGrid,
    placed: Vec<bool>,
}

impl PixelGridAssembler {
    pub fn new(width: u32, height: u32) -> Result<Self, AssemblePixelGridError> {
        Ok(Self {
            grid: PixelGrid::try_new(width, height)?,
            placed: vec![false; height as usize],
        })
    }

    pub fn place(&mut self, scanline: Scanline) -> Result<(), AssemblePixelGridError> {
        let Scanline { y, pixels } = scanline;
        self.grid.set_row(y, &pixels)?;

        let slot = &mut self.placed[y as usize];
        if *slot {
            return Err(AssemblePixelGridError::DuplicateRow { row: y });
        }
        *slot = true;

        Ok(())
    }

    pub fn finish(self) -> Result<PixelGrid, AssemblePixelGridError> {
        let missing = self.placed.iter().filter(|&&done| !done).count() as u32;
        if missing > 0 {
            return Err(AssemblePixelGridError::MissingRows {
                missing,
                height: self.grid.height(),
            });
        }

        Ok(self.grid)
    }

    /// Places every scanline, then finishes.
    pub fn assemble(
        mut self,
        scanlines: impl IntoIterator<Item = Scanline>,
    ) -> Result<PixelGrid, AssemblePixelGridError> {
        for scanline in scanlines {
            self.place(scanline)?;
        }

        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    fn solid(y: u32, width: u32, value: u8) -> Scanline {
        Scanline::new(y, vec![Colour::new(value, value, value); width as usize])
    }

    fn assemble_pixel_grid(
        width: u32,
        height: u32,
        scanlines: Vec<Scanline>,
    ) -> Result<PixelGrid, AssemblePixelGridError> {
        PixelGridAssembler::new(width, height)?.assemble(scanlines)
    }

    #[test]
    fn test_assembles_rows_in_spatial_order() {
        let scanlines = vec![solid(0, 2, 10), solid(1, 2, 20), solid(2, 2, 30)];

        let grid = assemble_pixel_grid(2, 3, scanlines).unwrap();

        assert_eq!(grid.pixel(1, 0), Some(Colour::new(10, 10, 10)));
        assert_eq!(grid.pixel(0, 1), Some(Colour::new(20, 20, 20)));
        assert_eq!(grid.pixel(1, 2), Some(Colour::new(30, 30, 30)));
    }

    #[test]
    fn test_completion_order_does_not_matter() {
        let in_order = vec![solid(0, 3, 1), solid(1, 3, 2), solid(2, 3, 3)];
        let shuffled = vec![solid(2, 3, 3), solid(0, 3, 1), solid(1, 3, 2)];

        let expected = assemble_pixel_grid(3, 3, in_order).unwrap();
        let actual = assemble_pixel_grid(3, 3, shuffled).unwrap();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_empty_grid_needs_no_rows() {
        let grid = assemble_pixel_grid(0, 0, Vec::new()).unwrap();

        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_width_rows_assemble_to_empty_grid() {
        let scanlines = vec![solid(0, 0, 0), solid(1, 0, 0)];

        let grid = assemble_pixel_grid(0, 2, scanlines).unwrap();

        assert_eq!(grid.len(), 0);
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_missing_rows_fail() {
        let scanlines = vec![solid(0, 2, 1), solid(2, 2, 1)];

        assert_eq!(
            assemble_pixel_grid(2, 4, scanlines),
            Err(AssemblePixelGridError::MissingRows {
                missing: 2,
                height: 4
            })
        );
    }

    #[test]
    fn test_duplicate_row_fails() {
        let scanlines = vec![solid(0, 2, 1), solid(0, 2, 2)];

        assert_eq!(
            assemble_pixel_grid(2, 2, scanlines),
            Err(AssemblePixelGridError::DuplicateRow { row: 0 })
        );
    }

    #[test]
    fn test_row_outside_grid_fails() {
        let scanlines = vec![solid(5, 2, 1)];

        assert_eq!(
            assemble_pixel_grid(2, 2, scanlines),
            Err(AssemblePixelGridError::PixelGrid(
                PixelGridError::RowOutsideBounds { row: 5, height: 2 }
            ))
        );
    }

    #[test]
    fn test_assembler_places_rows_incrementally() {
        let mut assembler = PixelGridAssembler::new(1, 2).unwrap();

        assembler.place(solid(1, 1, 7)).unwrap();
        assembler.place(solid(0, 1, 3)).unwrap();
        let grid = assembler.finish().unwrap();

        assert_eq!(grid.buffer(), &[3, 3, 3, 7, 7, 7]);
    }

    #[test]
    fn test_assembler_rejects_oversized_grid_up_front() {
        let result = PixelGridAssembler::new(u32::MAX, u32::MAX);

        assert!(matches!(
            result,
            Err(AssemblePixelGridError::PixelGrid(_))
        ));
    }

    #[test]
    fn test_row_of_wrong_width_fails() {
        let scanlines = vec![solid(0, 3, 1)];

        assert!(matches!(
            assemble_pixel_grid(2, 1, scanlines),
            Err(AssemblePixelGridError::PixelGrid(
                PixelGridError::RowWidthMismatch { row: 0, .. }
            ))
        ));
    }
}
