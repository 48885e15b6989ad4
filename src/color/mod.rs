//! Color sampling, conversion and comparison
//!
//! This module contains color-related functionality including:
//! - Average color extraction from image files
//! - RGB to HSL conversion with integer hue degrees
//! - The weighted color distance used for tile matching

/// RGB to HSL conversion and the weighted color distance
pub mod hsl;
/// RGB color values with alpha folded into the channels
pub mod rgb;
/// Average color extraction from image files
pub mod sampler;

pub use hsl::Hsl;
pub use rgb::Rgb;
