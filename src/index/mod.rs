//! Tile library indexing and nearest-color search
//!
//! This module contains index-related functionality including:
//! - The persistent per-library color table cache
//! - Hue-bucketed index construction and window search
//! - Library scanning, thumbnail regeneration and memoized loading

/// Persistent color-table cache and its directory layout
pub mod cache;
/// Hue buckets and the window-expansion search
pub mod matcher;
/// Tile library loading and per-pixel lookup
pub mod tileset;

pub use matcher::HueIndex;
pub use tileset::TileIndex;
