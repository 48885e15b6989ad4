//! RGB to HSL conversion tuned for hue-bucket indexing

use crate::color::rgb::Rgb;
use crate::io::configuration::SAT_LUM_WEIGHT;

/// Hue, saturation and luminance of a color
///
/// The hue is a truncated integer degree because it doubles as the bucket
/// key in the tile index; saturation and luminance stay fractional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue in whole degrees, `0..=359`
    pub hue: i32,
    /// Saturation as a fraction, `0.0..=1.0`
    pub sat: f64,
    /// Luminance as a fraction, `0.0..=1.0`
    pub lum: f64,
}

impl Hsl {
    /// Convert an RGB color, truncating the hue to a whole degree
    ///
    /// Truncation (not rounding) keeps the bucket key of a color stable:
    /// the same bytes always land in the same bucket. Achromatic colors
    /// report hue 0 and saturation 0.
    pub fn from_rgb(color: Rgb) -> Self {
        let brightest = color.red.max(color.green).max(color.blue);
        let darkest = color.red.min(color.green).min(color.blue);

        let max = f64::from(brightest) / 255.0;
        let min = f64::from(darkest) / 255.0;
        let lum = (max + min) / 2.0;

        if brightest == darkest {
            return Self {
                hue: 0,
                sat: 0.0,
                lum,
            };
        }

        let delta = max - min;
        let sat = delta / (1.0 - 2.0f64.mul_add(lum, -1.0).abs());

        let red = f64::from(color.red) / 255.0;
        let green = f64::from(color.green) / 255.0;
        let blue = f64::from(color.blue) / 255.0;

        let sixth = if brightest == color.red {
            ((green - blue) / delta) % 6.0
        } else if brightest == color.green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        let mut degrees = sixth * 60.0;
        if degrees < 0.0 {
            degrees += 360.0;
        }

        Self {
            hue: degrees as i32,
            sat,
            lum,
        }
    }

    /// Weighted distance to another color
    ///
    /// Hue differences count at full strength while saturation and
    /// luminance are damped by [`SAT_LUM_WEIGHT`], so matching follows hue
    /// first. The hue delta is taken in plain degrees with no wrap at the
    /// 0/360 seam.
    pub fn distance(self, other: Self) -> f64 {
        let hue = f64::from(self.hue - other.hue);
        let sat = (self.sat - other.sat) / SAT_LUM_WEIGHT;
        let lum = (self.lum - other.lum) / SAT_LUM_WEIGHT;
        hue.mul_add(hue, sat.mul_add(sat, lum * lum)).sqrt()
    }
}
