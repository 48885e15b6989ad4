//! Photomosaic generation through hue-indexed tile matching
//!
//! The system samples the average color of every tile in a library, groups
//! the tiles into hue buckets, and rebuilds a source image cell by cell
//! from the nearest-colored tiles, rendering the result in parallel
//! fragments.

#![forbid(unsafe_code)]

/// Color sampling, HSL conversion and the weighted color distance
pub mod color;
/// Tile library indexing, caching and nearest-color search
pub mod index;
/// Input/output operations, configuration and error handling
pub mod io;
/// Mosaic planning, fragment rendering and orchestration
pub mod mosaic;

pub use io::error::{MosaicError, Result};
