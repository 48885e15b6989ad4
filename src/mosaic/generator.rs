//! End-to-end mosaic generation

use crate::color::sampler;
use crate::index::tileset::TileIndex;
use crate::io::configuration::{DEFAULT_HUE_WINDOW, DEFAULT_MAX_MOSAIC_SIZE};
use crate::io::error::Result;
use crate::io::imaging;
use crate::mosaic::{composer, planner};
use std::path::Path;

/// Knobs for one generation run
#[derive(Clone, Copy, Debug)]
pub struct MosaicOptions {
    /// Half-width of the hue search window in degrees
    pub hue_window: u16,
    /// Upper bound on mosaic columns and rows
    pub max_mosaic_size: u32,
    /// Diagnostic verbosity; `1` prints stages, `2` adds per-pixel fallbacks
    pub verbose: u8,
    /// Suppress progress bars and diagnostics
    pub quiet: bool,
}

impl Default for MosaicOptions {
    fn default() -> Self {
        Self {
            hue_window: DEFAULT_HUE_WINDOW,
            max_mosaic_size: DEFAULT_MAX_MOSAIC_SIZE,
            verbose: 0,
            quiet: false,
        }
    }
}

impl MosaicOptions {
    /// Whether stage diagnostics should print
    pub const fn stage_diagnostics(&self) -> bool {
        self.verbose >= 1 && !self.quiet
    }
}

/// What a finished run produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MosaicReport {
    /// Tile columns in the finished mosaic
    pub columns: u32,
    /// Tile rows in the finished mosaic
    pub rows: u32,
    /// Fragments rendered
    pub fragments: usize,
}

/// Build a mosaic of `source` at `dest` from the tiles in `index`
///
/// Runs the full chain: index load, source color sampling, default tile
/// selection, grid planning with the size cap, fragment rendering and the
/// final save.
///
/// # Errors
///
/// Any stage failure propagates unchanged; nothing is retried.
// Allow print for user feedback on pipeline stages
#[allow(clippy::print_stderr)]
pub fn generate(
    source: &Path,
    dest: &Path,
    index: &mut TileIndex,
    options: &MosaicOptions,
) -> Result<MosaicReport> {
    let tile_size = index.tile_size();

    let indexed = index.load()?.len();
    if options.stage_diagnostics() {
        eprintln!("Indexed {indexed} tiles");
    }

    let base_color = sampler::sample_average_color(source)?;
    if options.stage_diagnostics() {
        eprintln!("Source average color {base_color}");
    }

    index.set_default_color(base_color)?;
    if options.stage_diagnostics() && let Some(default) = index.default_tile() {
        eprintln!("Default tile {}", default.display());
    }

    let (width, height) = imaging::dimensions(source)?;
    let (columns, rows) = planner::initial_grid(width, height, tile_size);
    let (columns, rows) = planner::clamp_grid(columns, rows, width, height, options.max_mosaic_size);
    if options.stage_diagnostics() {
        eprintln!("Source {width}x{height} px, mosaic {columns}x{rows} tiles");
    }

    let rgba = imaging::downsample_rgba(source, columns, rows)?;
    let plan = planner::plan_tiles(&rgba, columns, rows, index, options)?;

    let canvas = composer::render_mosaic(&plan, tile_size, options)?;
    imaging::save_png(&canvas, dest)?;

    let fragments = composer::fragment_layout(columns, rows).len();
    Ok(MosaicReport {
        columns,
        rows,
        fragments,
    })
}
