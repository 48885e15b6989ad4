//! Error types for mosaic generation

use crate::color::rgb::Rgb;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode an image to disk
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The color-table cache file could not be parsed or serialized
    CacheFormat {
        /// Path to the cache file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A pixel buffer or tile grid has the wrong length
    SizeMismatch {
        /// What was being measured
        what: &'static str,
        /// Length the geometry requires
        expected: usize,
        /// Length actually observed
        actual: usize,
    },

    /// The tile library contains no files
    EmptyTileLibrary {
        /// Path to the scanned library directory
        path: PathBuf,
    },

    /// No tile matched and no default tile was available
    NoTileAvailable {
        /// Color that found no match
        color: Rgb,
    },

    /// Source image data doesn't meet pipeline requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::CacheFormat { path, source } => {
                write!(f, "Invalid color table '{}': {source}", path.display())
            }
            Self::SizeMismatch {
                what,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Size mismatch in {what}: expected {expected}, got {actual}"
                )
            }
            Self::EmptyTileLibrary { path } => {
                write!(f, "Tile library '{}' contains no files", path.display())
            }
            Self::NoTileAvailable { color } => {
                write!(f, "No tile available for color {color}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::CacheFormat { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
