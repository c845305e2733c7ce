use std::error::Error;

use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled,
};
use crate::core::actions::generate_scanlines::ports::colour_map::ColourMap;
use crate::core::actions::generate_scanlines::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::scanline::Scanline;

#[derive(Debug, thiserror::Error)]
pub enum GenerateScanlinesError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    /// A single row could not be produced; the whole image is discarded.
    #[error("row {row} failed: {source}")]
    RowFailed {
        row: u32,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

fn row_failed(row: u32, err: impl Error + Send + Sync + 'static) -> GenerateScanlinesError {
    GenerateScanlinesError::RowFailed {
        row,
        source: Box::new(err),
    }
}

/// Computes every row of a `width` x `height` image on rayon's pool, one task
/// per row, polling `cancel` at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// Returns only after all row tasks have finished. If any row fails, the
/// error of one failing row is returned and no scanlines are.
pub fn generate_scanlines_cancelable<Alg, CMap, C>(
    width: u32,
    height: u32,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<Vec<Scanline>, GenerateScanlinesError>
where
    Alg: FractalAlgorithm<Success = CMap::T> + Sync,
    Alg::Failure: Send + Sync + 'static,
    CMap: ColourMap + Sync,
    CMap::Failure: Send + Sync + 'static,
    C: CancelToken,
{
    (0..height)
        .into_par_iter()
        .map(|y| generate_scanline(y, width, algorithm, colour_map, cancel))
        .collect()
}

fn generate_scanline<Alg, CMap, C>(
    y: u32,
    width: u32,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<Scanline, GenerateScanlinesError>
where
    Alg: FractalAlgorithm<Success = CMap::T>,
    Alg::Failure: Send + Sync + 'static,
    CMap: ColourMap,
    CMap::Failure: Send + Sync + 'static,
    C: CancelToken,
{
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(width as usize)
        .map_err(|err| row_failed(y, err))?;

    for (i, x) in (0..width).enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled.into());
        }

        let value = algorithm
            .compute(Point { x, y })
            .map_err(|err| row_failed(y, err))?;
        let colour = colour_map.map(value).map_err(|err| row_failed(y, err))?;

        pixels.push(colour);
    }

    Ok(Scanline::new(y, pixels))
}
