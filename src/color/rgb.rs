//! RGB color values with alpha folded into the channels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color of a pixel or tile after alpha normalization
///
/// Stored in the color-table cache, so the field names are part of the
/// cache format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel intensity
    pub red: u8,
    /// Green channel intensity
    pub green: u8,
    /// Blue channel intensity
    pub blue: u8,
}

impl Rgb {
    /// Create a color from plain channel values
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from an RGBA quad, scaling each channel by alpha
    ///
    /// Each channel becomes `floor(channel * alpha / 255)`: opaque pixels
    /// pass through unchanged and fully transparent pixels collapse to
    /// black.
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red: scale_by_alpha(red, alpha),
            green: scale_by_alpha(green, alpha),
            blue: scale_by_alpha(blue, alpha),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

const fn scale_by_alpha(channel: u8, alpha: u8) -> u8 {
    ((channel as u16 * alpha as u16) / 255) as u8
}
