//! Hue-bucketed tile index and nearest-color search

use crate::color::hsl::Hsl;
use crate::index::cache::ColorTable;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One indexed tile: its color and the resized copy to draw
#[derive(Clone, Debug)]
pub struct TileEntry {
    /// Average color of the resized tile
    pub color: Hsl,
    /// Path of the resized tile in the cache directory
    pub path: PathBuf,
}

/// Winning tile of a search
#[derive(Clone, Copy, Debug)]
pub struct TileMatch<'a> {
    /// Path of the resized tile to draw
    pub path: &'a Path,
    /// Weighted distance between the target and the tile color
    pub distance: f64,
}

/// Tiles grouped by truncated hue degree
///
/// Buckets exist only for hues that occur in the library; a lookup outside
/// `0..=359` is legal and simply misses. Built once when the library
/// loads, read-only afterwards.
#[derive(Debug, Default)]
pub struct HueIndex {
    buckets: HashMap<i32, Vec<TileEntry>>,
}

impl HueIndex {
    /// Build the index from a color table
    pub fn from_color_table(table: &ColorTable) -> Self {
        let mut index = Self::default();
        for (path, &rgb) in table {
            index.insert(Hsl::from_rgb(rgb), path.clone());
        }
        index
    }

    /// Add one tile under its hue bucket
    pub fn insert(&mut self, color: Hsl, path: PathBuf) {
        self.buckets
            .entry(color.hue)
            .or_default()
            .push(TileEntry { color, path });
    }

    /// Number of indexed tiles
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether the index holds no tiles
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Closest tile within `window` degrees of the target hue
    ///
    /// Probes the bucket at the target hue, then alternately above and
    /// below in widening one-degree steps up to `window`. Probe keys are
    /// taken literally: there is no wrap at the 0/360 seam, so a target
    /// near 0 never sees buckets near 359. A candidate replaces the
    /// current best only on a strictly smaller distance, so earlier
    /// probes win ties. Returns `None` when every probed bucket is empty.
    pub fn find_tile(&self, target: Hsl, window: u16) -> Option<TileMatch<'_>> {
        let mut best: Option<TileMatch<'_>> = None;
        for step in 0..=i32::from(window) {
            for key in [target.hue + step, target.hue - step] {
                let Some(entries) = self.buckets.get(&key) else {
                    continue;
                };
                for entry in entries {
                    let distance = target.distance(entry.color);
                    if best.is_none_or(|current| distance < current.distance) {
                        best = Some(TileMatch {
                            path: &entry.path,
                            distance,
                        });
                    }
                }
            }
        }
        best
    }
}
