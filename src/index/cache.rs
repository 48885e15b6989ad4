//! On-disk color table for a tile library

use crate::color::rgb::Rgb;
use crate::io::configuration::COLOR_TABLE_FILE;
use crate::io::error::{MosaicError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from resized tile path to its average color
///
/// Keys are the resized copies inside the cache directory, not the library
/// originals; the composer opens exactly these paths when drawing. Sorted
/// keys keep the serialized file and the index build order deterministic.
pub type ColorTable = BTreeMap<PathBuf, Rgb>;

/// Cache directory for one library at one tile size
///
/// The directory name carries both the library name and the tile size, so
/// the same library resized differently never shares thumbnails, and the
/// color table always sits next to the thumbnails it refers to.
pub fn cache_dir_for(cache_root: &Path, library: &Path, tile_size: u32) -> PathBuf {
    let name = library.file_name().unwrap_or_default().to_string_lossy();
    cache_root.join(format!("{name}-{tile_size}px"))
}

/// Path of the color-table file inside a cache directory
pub fn color_table_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join(COLOR_TABLE_FILE)
}

/// Read a previously written color table
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when the file cannot be read and
/// [`MosaicError::CacheFormat`] when it doesn't parse as a color table.
pub fn read_color_table(path: &Path) -> Result<ColorTable> {
    let raw = std::fs::read(path).map_err(|err| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read color table",
        source: err,
    })?;
    serde_json::from_slice(&raw).map_err(|err| MosaicError::CacheFormat {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Write the color table, creating the cache directory if needed
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when the directory or file cannot
/// be written and [`MosaicError::CacheFormat`] when serialization fails.
pub fn write_color_table(path: &Path, table: &ColorTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create cache directory",
            source: err,
        })?;
    }
    let raw = serde_json::to_vec(table).map_err(|err| MosaicError::CacheFormat {
        path: path.to_path_buf(),
        source: err,
    })?;
    std::fs::write(path, raw).map_err(|err| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "write color table",
        source: err,
    })
}
