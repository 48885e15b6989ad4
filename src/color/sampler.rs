//! Representative color extraction for tiles and source images

use crate::color::rgb::Rgb;
use crate::io::error::{MosaicError, Result};
use crate::io::imaging;
use std::path::Path;

/// Average color of an image file with alpha folded in
///
/// Decodes the whole image, takes the per-channel integer mean of the raw
/// RGBA data, then scales the mean color by the mean alpha. Averaging over
/// every pixel keeps the result independent of any resize filter.
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] when the file cannot be decoded and
/// [`MosaicError::InvalidSourceData`] when it decodes to zero pixels.
pub fn sample_average_color(path: &Path) -> Result<Rgb> {
    let rgba = imaging::read_rgba(path)?;
    if rgba.is_empty() {
        return Err(MosaicError::InvalidSourceData {
            reason: format!("'{}' decoded to zero pixels", path.display()),
        });
    }
    Ok(average_rgba(&rgba))
}

/// Per-channel mean of raw RGBA data, alpha folded into the result
///
/// Sums truncate toward zero on division, matching the integer arithmetic
/// used everywhere else in the pipeline. An empty buffer yields black.
pub fn average_rgba(rgba: &[u8]) -> Rgb {
    let mut sums = [0_u64; 4];
    for pixel in rgba.chunks_exact(4) {
        if let &[red, green, blue, alpha] = pixel {
            sums[0] += u64::from(red);
            sums[1] += u64::from(green);
            sums[2] += u64::from(blue);
            sums[3] += u64::from(alpha);
        }
    }

    let count = (rgba.len() / 4) as u64;
    if count == 0 {
        return Rgb::new(0, 0, 0);
    }

    Rgb::from_rgba(
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
        (sums[3] / count) as u8,
    )
}
