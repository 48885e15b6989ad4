//! Mosaic constants and runtime configuration defaults

// Matching constants for the hue-bucket search
/// Default half-width of the hue search window in degrees
pub const DEFAULT_HUE_WINDOW: u16 = 60;

// Covers 320 degrees either side of the target; the far side of the
// 0/360 seam stays out of reach because probes never wrap
/// Hue half-window used when picking the default tile
pub const WIDE_HUE_WINDOW: u16 = 320;

/// Divisor damping saturation and luminance in the color distance
pub const SAT_LUM_WEIGHT: f64 = 3.0;

// Geometry defaults for the mosaic grid
/// Default edge length of a mosaic cell in pixels
pub const DEFAULT_TILE_SIZE: u32 = 16;

// Caps memory and tile lookups for very large sources
/// Default upper bound on mosaic columns and rows
pub const DEFAULT_MAX_MOSAIC_SIZE: u32 = 200;

/// Edge length of a render fragment in tiles
pub const FRAGMENT_SIZE: u32 = 10;

// Cache layout
/// File name of the per-library color table
pub const COLOR_TABLE_FILE: &str = "colors.json";
