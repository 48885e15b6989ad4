//! Thin wrappers around the image toolkit
//!
//! Every decode, resize and encode in the crate goes through this module,
//! so toolkit usage stays at one seam. Resizes are always forced to the
//! exact requested dimensions; aspect ratio is the caller's concern.

use crate::io::error::{MosaicError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Decode an image into raw RGBA bytes
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] when the file cannot be decoded.
pub fn read_rgba(path: &Path) -> Result<Vec<u8>> {
    Ok(open(path)?.to_rgba8().into_raw())
}

/// Resize an image to exactly `width` by `height` and return raw RGBA bytes
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] when the file cannot be decoded.
pub fn downsample_rgba(path: &Path, width: u32, height: u32) -> Result<Vec<u8>> {
    let resized = open(path)?.resize_exact(width, height, FilterType::Lanczos3);
    Ok(resized.to_rgba8().into_raw())
}

/// Resize an image to exactly `width` by `height` and save it as 24-bit PNG
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] when the source cannot be decoded and
/// [`MosaicError::ImageExport`] when the PNG cannot be written.
pub fn resize_to_png(source: &Path, dest: &Path, width: u32, height: u32) -> Result<()> {
    let resized = open(source)?.resize_exact(width, height, FilterType::Lanczos3);
    resized
        .to_rgb8()
        .save_with_format(dest, ImageFormat::Png)
        .map_err(|err| MosaicError::ImageExport {
            path: dest.to_path_buf(),
            source: err,
        })
}

/// Pixel dimensions of an image, read from the file header
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] when the header cannot be read.
pub fn dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|err| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Open an image as an RGBA pixel buffer
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] when the file cannot be decoded.
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    Ok(open(path)?.to_rgba8())
}

/// Create an opaque white canvas of the given pixel dimensions
pub fn white_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
}

/// Draw `tile` onto `canvas` with its top-left corner at `(x, y)`
///
/// Pixels are replaced, not blended; parts of `tile` outside the canvas
/// are clipped.
pub fn draw_at(canvas: &mut RgbaImage, tile: &RgbaImage, x: u32, y: u32) {
    image::imageops::replace(canvas, tile, i64::from(x), i64::from(y));
}

/// Save an RGBA buffer as a PNG file, creating parent directories
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when a parent directory cannot be
/// created and [`MosaicError::ImageExport`] when the encode fails.
pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create output directory",
            source: err,
        })?;
    }
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| MosaicError::ImageExport {
            path: path.to_path_buf(),
            source: err,
        })
}

fn open(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|err| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: err,
    })
}
