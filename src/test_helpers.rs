//! Shared test utilities for the instasquare test suite.
//!
//! Synthetic images and encoded assets, so tests never depend on fixture
//! files on disk.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let src = gradient_image(300, 150);
//! let bytes = encode_test_png(&src);
//! let rotated = with_exif_orientation(encode_test_jpeg(200, 100), 6);
//! ```

use crate::imaging::Image;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};

// =========================================================================
// Synthetic images
// =========================================================================

/// An opaque image where every pixel is distinct within 256x256.
///
/// White never appears, so margin checks can't be fooled by source content.
pub fn gradient_image(width: u32, height: u32) -> Image {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    Image::from_rgba(pixels).unwrap()
}

/// A 3000000x1 strip: small to encode, enormous once padded square.
pub fn long_strip() -> Image {
    Image::from_rgba(RgbaImage::new(3_000_000, 1)).unwrap()
}

// =========================================================================
// Encoded assets
// =========================================================================

/// Encode an image as PNG bytes (lossless, so pixels survive exactly).
pub fn encode_test_png(image: &Image) -> Vec<u8> {
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(
            image.as_rgba().as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .unwrap();
    buf
}

/// Create a small valid JPEG with the given dimensions.
pub fn encode_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

/// Splice a minimal EXIF APP1 segment carrying `Orientation` into a JPEG.
///
/// The segment is a big-endian TIFF header with a single IFD0 entry
/// (tag 0x0112, SHORT, count 1), inserted right after the SOI marker.
pub fn with_exif_orientation(jpeg: Vec<u8>, orientation: u16) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "not a JPEG");

    let mut payload = Vec::new();
    payload.extend_from_slice(b"Exif\0\0");
    payload.extend_from_slice(b"MM\0\x2A\0\0\0\x08"); // TIFF header, IFD0 at offset 8
    payload.extend_from_slice(&1u16.to_be_bytes()); // entry count
    payload.extend_from_slice(&0x0112u16.to_be_bytes()); // Orientation
    payload.extend_from_slice(&3u16.to_be_bytes()); // SHORT
    payload.extend_from_slice(&1u32.to_be_bytes()); // count
    payload.extend_from_slice(&orientation.to_be_bytes());
    payload.extend_from_slice(&[0, 0]); // value padding
    payload.extend_from_slice(&0u32.to_be_bytes()); // no next IFD

    let segment_len = (payload.len() + 2) as u16;
    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}
