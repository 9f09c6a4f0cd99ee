//! Square padding: the one transform this crate exists for.
//!
//! The source is copied unscaled onto a `max(w, h)` square canvas pre-filled
//! with the fill color. Source pixels replace canvas pixels verbatim (no alpha
//! blending), so every source pixel survives unchanged at its original
//! position relative to the placement offset.

use super::ImagingError;
use super::calculations::{canvas_side, placement_offset};
use super::raster::{FillColor, Image};
use image::RgbaImage;
use image::imageops;

/// Pad an image to a square with a white background.
pub fn pad(image: &Image) -> Result<Image, ImagingError> {
    pad_with(image, FillColor::WHITE)
}

/// Pad an image to a square with the given fill color.
///
/// Already-square input comes back pixel-identical (as a fresh copy).
pub fn pad_with(image: &Image, fill: FillColor) -> Result<Image, ImagingError> {
    let (width, height) = (image.width(), image.height());
    // `Image` can't be built empty, but this is the contract boundary
    if width == 0 || height == 0 {
        return Err(ImagingError::InvalidImage { width, height });
    }

    let side = canvas_side(width, height);
    let (x, y) = placement_offset((width, height), side);

    let mut canvas = RgbaImage::from_pixel(side, side, fill.to_rgba());
    imageops::replace(&mut canvas, image.as_rgba(), i64::from(x), i64::from(y));

    log::debug!("padded {width}x{height} onto {side}x{side} canvas at ({x}, {y})");
    Image::from_rgba(canvas)
}
