//! Tile library loading, caching and per-pixel lookup

use crate::color::hsl::Hsl;
use crate::color::rgb::Rgb;
use crate::color::sampler;
use crate::index::cache::{self, ColorTable};
use crate::index::matcher::HueIndex;
use crate::io::configuration::WIDE_HUE_WINDOW;
use crate::io::error::{MosaicError, Result};
use crate::io::imaging;
use crate::io::progress;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

/// A tile library with its persistent color cache and hue index
///
/// [`TileIndex::load`] is memoized: the first call reads or regenerates
/// the color table and builds the hue index; later calls return the same
/// index. Concurrent first calls block on a build guard and share one
/// build, so the library is never scanned twice. A failed build is not
/// memoized; the next call retries.
pub struct TileIndex {
    folder: PathBuf,
    tile_size: u32,
    cache_dir: PathBuf,
    index: OnceLock<HueIndex>,
    build_guard: Mutex<()>,
    default_tile: Option<PathBuf>,
    quiet: bool,
    verbose: u8,
}

impl TileIndex {
    /// Index for `folder` with resized tiles cached under the system temp dir
    pub fn new(folder: &Path, tile_size: u32) -> Self {
        Self::with_cache_root(folder, tile_size, &std::env::temp_dir())
    }

    /// Index for `folder` with resized tiles cached under `cache_root`
    ///
    /// The cache directory is derived from the library name and tile size,
    /// so the same arguments always reuse the same cache.
    pub fn with_cache_root(folder: &Path, tile_size: u32, cache_root: &Path) -> Self {
        Self {
            folder: folder.to_path_buf(),
            tile_size,
            cache_dir: cache::cache_dir_for(cache_root, folder, tile_size),
            index: OnceLock::new(),
            build_guard: Mutex::new(()),
            default_tile: None,
            quiet: false,
            verbose: 0,
        }
    }

    /// Suppress the regeneration progress bar
    pub const fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    /// Diagnostic verbosity; `2` and up reports per-pixel fallbacks
    pub const fn set_verbose(&mut self, verbose: u8) {
        self.verbose = verbose;
    }

    /// Edge length of the resized tiles in pixels
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Directory holding the resized tiles and the color table
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Fallback tile chosen by [`Self::set_default_color`], if any
    pub fn default_tile(&self) -> Option<&Path> {
        self.default_tile.as_deref()
    }

    /// Load the hue index, building it on first use
    ///
    /// Reads the cached color table when present; otherwise resizes every
    /// library file into the cache directory, samples the resized copies,
    /// and writes the table once at the end.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyTileLibrary`] for a library with no
    /// files, and propagates decode, resize and cache read/write failures.
    pub fn load(&self) -> Result<&HueIndex> {
        if let Some(index) = self.index.get() {
            return Ok(index);
        }

        let guard = self
            .build_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(index) = self.index.get() {
            drop(guard);
            return Ok(index);
        }

        let table = self.load_color_table()?;
        let built = self.index.get_or_init(|| HueIndex::from_color_table(&table));
        drop(guard);
        Ok(built)
    }

    /// Pick the fallback tile for `color` using the wide hue window
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::NoTileAvailable`] when even the wide window
    /// finds nothing, and propagates index build failures from
    /// [`Self::load`].
    pub fn set_default_color(&mut self, color: Rgb) -> Result<()> {
        let target = Hsl::from_rgb(color);
        let path = {
            let index = self.load()?;
            index
                .find_tile(target, WIDE_HUE_WINDOW)
                .map(|found| found.path.to_path_buf())
                .ok_or(MosaicError::NoTileAvailable { color })?
        };
        self.default_tile = Some(path);
        Ok(())
    }

    /// Best tile for one pixel, falling back to the default tile
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::NoTileAvailable`] when the window search
    /// misses and no default tile has been set, and propagates index
    /// build failures from [`Self::load`].
    pub fn find_best_tile_for_pixel(&self, color: Rgb, hue_window: u16) -> Result<&Path> {
        let target = Hsl::from_rgb(color);
        let index = self.load()?;

        if let Some(found) = index.find_tile(target, hue_window) {
            return Ok(found.path);
        }

        if let Some(default) = &self.default_tile {
            // Allow print for user feedback on fallback pixels
            #[allow(clippy::print_stderr)]
            if self.verbose >= 2 {
                eprintln!("No tile within {hue_window} degrees of {color}, using default");
            }
            return Ok(default.as_path());
        }

        Err(MosaicError::NoTileAvailable { color })
    }

    fn load_color_table(&self) -> Result<ColorTable> {
        let table_path = cache::color_table_path(&self.cache_dir);
        if table_path.exists() {
            return cache::read_color_table(&table_path);
        }
        let table = self.regenerate()?;
        cache::write_color_table(&table_path, &table)?;
        Ok(table)
    }

    /// Resize every library file into the cache directory and sample it
    ///
    /// Strictly sequential: one decode and one encode in flight at a time,
    /// so regeneration of a large library never floods the system.
    fn regenerate(&self) -> Result<ColorTable> {
        let files = self.collect_tiles()?;
        if files.is_empty() {
            return Err(MosaicError::EmptyTileLibrary {
                path: self.folder.clone(),
            });
        }

        std::fs::create_dir_all(&self.cache_dir).map_err(|err| MosaicError::FileSystem {
            path: self.cache_dir.clone(),
            operation: "create cache directory",
            source: err,
        })?;

        let bar = progress::phase_bar("Resizing", files.len() as u64, self.quiet);
        let mut table = ColorTable::new();
        for file in &files {
            let resized = self.resized_path(file);
            imaging::resize_to_png(file, &resized, self.tile_size, self.tile_size)?;
            let color = sampler::sample_average_color(&resized)?;
            table.insert(resized, color);
            bar.inc(1);
        }
        bar.finish_and_clear();

        Ok(table)
    }

    /// Every file in the library folder, sorted for deterministic order
    ///
    /// No extension filtering: a non-image file in the library is a hard
    /// failure at resize time rather than a silent skip.
    fn collect_tiles(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.folder).map_err(|err| MosaicError::FileSystem {
            path: self.folder.clone(),
            operation: "scan tile library",
            source: err,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| MosaicError::FileSystem {
                path: self.folder.clone(),
                operation: "scan tile library",
                source: err,
            })?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    // Full original file name plus .png, so a.jpg and a.png never collide
    fn resized_path(&self, original: &Path) -> PathBuf {
        let name = original.file_name().unwrap_or_default().to_string_lossy();
        self.cache_dir.join(format!("{name}.png"))
    }
}
