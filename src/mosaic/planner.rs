//! Grid sizing and per-pixel tile selection

use crate::color::rgb::Rgb;
use crate::index::tileset::TileIndex;
use crate::io::error::{MosaicError, Result};
use crate::io::progress;
use crate::mosaic::generator::MosaicOptions;
use ndarray::Array2;
use std::path::Path;

/// Chosen tiles for every mosaic cell
///
/// Row-major: cell `(row, column)` holds the resized tile to draw there.
/// Borrowed from the index that produced it.
pub struct TilePlan<'a> {
    grid: Array2<&'a Path>,
}

impl<'a> TilePlan<'a> {
    /// Tile columns in the plan
    pub fn columns(&self) -> u32 {
        self.grid.ncols() as u32
    }

    /// Tile rows in the plan
    pub fn rows(&self) -> u32 {
        self.grid.nrows() as u32
    }

    /// Tile at `(row, column)`, if inside the grid
    pub fn tile_at(&self, row: u32, column: u32) -> Option<&'a Path> {
        self.grid.get((row as usize, column as usize)).copied()
    }
}

/// Tile columns and rows for a source of the given pixel size
///
/// Each dimension rounds to the nearest whole tile and never drops below
/// one, so a source smaller than half a tile still produces a cell.
pub fn initial_grid(width: u32, height: u32, tile_size: u32) -> (u32, u32) {
    let columns = (f64::from(width) / f64::from(tile_size)).round() as u32;
    let rows = (f64::from(height) / f64::from(tile_size)).round() as u32;
    (columns.max(1), rows.max(1))
}

/// Clamp an oversized grid to `max` cells on its larger side
///
/// The smaller side is recomputed from the source pixel aspect ratio and
/// floored, then raised back to one if the ratio is extreme. When both
/// sides are equal and over the cap, the clamp runs instead of being
/// skipped, so square sources are capped too.
pub fn clamp_grid(columns: u32, rows: u32, width: u32, height: u32, max: u32) -> (u32, u32) {
    if columns >= rows && columns > max {
        let scaled = ((f64::from(height) / f64::from(width)) * f64::from(max)).floor() as u32;
        (max, scaled.max(1))
    } else if rows > columns && rows > max {
        let scaled = ((f64::from(width) / f64::from(height)) * f64::from(max)).floor() as u32;
        (scaled.max(1), max)
    } else {
        (columns, rows)
    }
}

/// Choose a tile for every cell of a `columns` by `rows` grid
///
/// `rgba` must hold exactly `columns * rows` RGBA pixels in row-major
/// order, as produced by the forced downsample of the source. Each pixel
/// is alpha-normalized and matched within the configured hue window;
/// pixels with no match take the index's default tile.
///
/// # Errors
///
/// Returns [`MosaicError::SizeMismatch`] when the buffer length doesn't
/// match the grid geometry, and propagates match failures.
pub fn plan_tiles<'a>(
    rgba: &[u8],
    columns: u32,
    rows: u32,
    index: &'a TileIndex,
    options: &MosaicOptions,
) -> Result<TilePlan<'a>> {
    let cells = columns as usize * rows as usize;
    let expected = cells * 4;
    if rgba.len() != expected {
        return Err(MosaicError::SizeMismatch {
            what: "downsampled source buffer",
            expected,
            actual: rgba.len(),
        });
    }

    let bar = progress::phase_bar("Matching", cells as u64, options.quiet);
    let mut choices: Vec<&'a Path> = Vec::with_capacity(cells);
    for pixel in rgba.chunks_exact(4) {
        if let &[red, green, blue, alpha] = pixel {
            let color = Rgb::from_rgba(red, green, blue, alpha);
            choices.push(index.find_best_tile_for_pixel(color, options.hue_window)?);
            bar.inc(1);
        }
    }
    bar.finish_and_clear();

    let chosen = choices.len();
    let grid = Array2::from_shape_vec((rows as usize, columns as usize), choices).map_err(
        |_shape_err| MosaicError::SizeMismatch {
            what: "tile grid",
            expected: cells,
            actual: chosen,
        },
    )?;

    Ok(TilePlan { grid })
}
