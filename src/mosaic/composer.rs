//! Fragment-based mosaic rendering

use crate::io::configuration::FRAGMENT_SIZE;
use crate::io::error::Result;
use crate::io::imaging;
use crate::io::progress;
use crate::mosaic::generator::MosaicOptions;
use crate::mosaic::planner::TilePlan;
use image::RgbaImage;
use rayon::prelude::*;

/// One fragment's place in the plan and on the final canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FragmentFrame {
    /// First grid column covered by the fragment
    pub column: u32,
    /// First grid row covered by the fragment
    pub row: u32,
    /// Columns covered; full fragments span [`FRAGMENT_SIZE`]
    pub columns: u32,
    /// Rows covered; full fragments span [`FRAGMENT_SIZE`]
    pub rows: u32,
}

/// Split a grid into square frames of [`FRAGMENT_SIZE`] tiles, row major
///
/// Edge frames take the remainder, so every cell belongs to exactly one
/// frame and no frame is empty.
pub fn fragment_layout(columns: u32, rows: u32) -> Vec<FragmentFrame> {
    let mut frames = Vec::new();
    for frame_row in 0..rows.div_ceil(FRAGMENT_SIZE) {
        for frame_column in 0..columns.div_ceil(FRAGMENT_SIZE) {
            let column = frame_column * FRAGMENT_SIZE;
            let row = frame_row * FRAGMENT_SIZE;
            frames.push(FragmentFrame {
                column,
                row,
                columns: FRAGMENT_SIZE.min(columns - column),
                rows: FRAGMENT_SIZE.min(rows - row),
            });
        }
    }
    frames
}

/// Render the plan into the final canvas
///
/// Fragments render independently and in parallel on the worker pool;
/// each carries its own destination offset, so completion order never
/// affects placement. Assembly lays the finished fragments onto a white
/// canvas of `columns * tile_size` by `rows * tile_size` pixels.
///
/// # Errors
///
/// Propagates the first tile decode failure from any fragment.
pub fn render_mosaic(
    plan: &TilePlan<'_>,
    tile_size: u32,
    options: &MosaicOptions,
) -> Result<RgbaImage> {
    let frames = fragment_layout(plan.columns(), plan.rows());
    let bar = progress::phase_bar("Rendering", frames.len() as u64, options.quiet);

    let rendered: Vec<(FragmentFrame, RgbaImage)> = frames
        .into_par_iter()
        .map(|frame| {
            let fragment = render_fragment(plan, frame, tile_size)?;
            bar.inc(1);
            Ok((frame, fragment))
        })
        .collect::<Result<_>>()?;
    bar.finish_and_clear();

    let mut canvas = imaging::white_canvas(plan.columns() * tile_size, plan.rows() * tile_size);
    for (frame, fragment) in &rendered {
        imaging::draw_at(
            &mut canvas,
            fragment,
            frame.column * tile_size,
            frame.row * tile_size,
        );
    }
    Ok(canvas)
}

fn render_fragment(plan: &TilePlan<'_>, frame: FragmentFrame, tile_size: u32) -> Result<RgbaImage> {
    let mut fragment = imaging::white_canvas(frame.columns * tile_size, frame.rows * tile_size);
    for row in 0..frame.rows {
        for column in 0..frame.columns {
            let Some(tile_path) = plan.tile_at(frame.row + row, frame.column + column) else {
                continue;
            };
            let tile = imaging::open_rgba(tile_path)?;
            imaging::draw_at(&mut fragment, &tile, column * tile_size, row * tile_size);
        }
    }
    Ok(fragment)
}
