//! Command-line interface for photomosaic generation

use crate::index::tileset::TileIndex;
use crate::io::configuration::{DEFAULT_HUE_WINDOW, DEFAULT_MAX_MOSAIC_SIZE, DEFAULT_TILE_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::mosaic::generator::{self, MosaicOptions};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huetile")]
#[command(
    author,
    version,
    about = "Assemble a photomosaic from a library of image tiles"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Directory containing the tile images
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Image to rebuild as a mosaic
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output path for the finished mosaic
    #[arg(short, long, default_value = "mosaic.png")]
    pub output: PathBuf,

    /// Edge length of a mosaic cell in pixels
    #[arg(short = 's', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Upper bound on mosaic columns and rows
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_MOSAIC_SIZE)]
    pub max_mosaic_size: u32,

    /// Half-width of the hue search window in degrees
    #[arg(short = 'w', long, default_value_t = DEFAULT_HUE_WINDOW)]
    pub hue_window: u16,

    /// Directory for resized tiles and the color table (defaults to the system temp dir)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Print stage diagnostics; repeat for per-pixel fallback reports
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress bars and diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Validate argument combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] for a zero tile
    /// size, a zero mosaic cap, or a tile path that isn't a directory.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile-size",
                &self.tile_size,
                &"must be at least 1 pixel",
            ));
        }
        if self.max_mosaic_size == 0 {
            return Err(invalid_parameter(
                "max-mosaic-size",
                &self.max_mosaic_size,
                &"must be at least 1 tile",
            ));
        }
        if !self.tiles.is_dir() {
            return Err(invalid_parameter(
                "tiles",
                &self.tiles.display(),
                &"must be an existing directory",
            ));
        }
        Ok(())
    }
}

/// Run one generation from parsed arguments
///
/// # Errors
///
/// Returns an error when validation or any pipeline stage fails.
pub fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    let cache_root = cli.cache_dir.clone().unwrap_or_else(std::env::temp_dir);
    let mut index = TileIndex::with_cache_root(&cli.tiles, cli.tile_size, &cache_root);
    index.set_quiet(cli.quiet);
    index.set_verbose(cli.verbose);

    let options = MosaicOptions {
        hue_window: cli.hue_window,
        max_mosaic_size: cli.max_mosaic_size,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let report = generator::generate(&cli.source, &cli.output, &mut index, &options)?;

    // Allow print for user feedback on completion
    #[allow(clippy::print_stderr)]
    if !cli.quiet {
        eprintln!(
            "Wrote {} ({}x{} tiles, {} fragments)",
            cli.output.display(),
            report.columns,
            report.rows,
            report.fragments
        );
    }

    Ok(())
}
