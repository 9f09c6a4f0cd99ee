//! Decoding picked assets and encoding images for the library.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Sniff format | `image::ImageReader::with_guessed_format` |
//! | Header dimensions | `ImageDecoder::dimensions` (no pixel decode) |
//! | Orientation | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Decode (JPEG, PNG, TIFF, WebP) | `DynamicImage::from_decoder` |
//! | Encode PNG / JPEG / WebP / TIFF / AVIF | `image::codecs::*` encoders |
//!
//! Input formats are sniffed from bytes, never from a file extension: a
//! picker hands over asset data, not paths.

use super::ImagingError;
use super::calculations::{canvas_exceeds_limit, canvas_side};
use super::raster::Image;
use image::metadata::Orientation;
use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageEncoder, ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// Input formats whose decoders are compiled in.
const INPUT_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Tiff,
    ImageFormat::WebP,
];

/// Human-readable names of the accepted input formats.
pub fn supported_input_formats() -> Vec<&'static str> {
    INPUT_FORMATS
        .iter()
        .filter(|fmt| fmt.reading_enabled())
        .map(|fmt| fmt.extensions_str()[0])
        .collect()
}

/// Encodings the library can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    /// Lossless only; `image` has no lossy WebP encoder.
    Webp,
    Tiff,
    Avif,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Tiff => "tiff",
            Self::Avif => "avif",
        }
    }

    /// Whether `quality` has any effect on this encoding.
    pub fn is_lossy(self) -> bool {
        matches!(self, Self::Jpeg | Self::Avif)
    }
}

/// Decode an encoded asset into an upright [`Image`].
///
/// `max_pixels` (0 = unlimited) bounds the square canvas the image will be
/// padded to, not just the source. It is checked against the header before
/// any pixels are decoded, so an oversized pick is rejected without
/// allocating it.
pub fn decode(bytes: &[u8], max_pixels: u64) -> Result<Image, ImagingError> {
    let format = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .format()
        .filter(|fmt| INPUT_FORMATS.contains(fmt))
        .ok_or_else(|| {
            ImagingError::UnsupportedFormat(format!(
                "unrecognized image data (accepted: {})",
                supported_input_formats().join(", ")
            ))
        })?;

    let mut decoder = ImageReader::with_format(Cursor::new(bytes), format)
        .into_decoder()
        .map_err(|e| ImagingError::Decode(format!("Failed to read {format:?} header: {e}")))?;
    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Err(ImagingError::InvalidImage { width, height });
    }
    if canvas_exceeds_limit(width, height, max_pixels) {
        return Err(ImagingError::TooLarge {
            width,
            height,
            side: canvas_side(width, height),
            limit: max_pixels,
        });
    }

    // Unreadable EXIF is treated as upright
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut decoded = DynamicImage::from_decoder(decoder)
        .map_err(|e| ImagingError::Decode(format!("Failed to decode {format:?}: {e}")))?;
    if orientation != Orientation::NoTransforms {
        log::debug!("applying EXIF orientation {orientation:?}");
        decoded.apply_orientation(orientation);
    }

    Image::from_dynamic(decoded)
}

/// Encode an image in the given format.
///
/// `quality` (1–100) is used by JPEG and AVIF and ignored by the lossless
/// encodings. JPEG has no alpha channel, so alpha is dropped.
pub fn encode(image: &Image, format: OutputFormat, quality: u8) -> Result<Vec<u8>, ImagingError> {
    let (width, height) = (image.width(), image.height());
    let rgba = image.as_rgba();
    let quality = quality.clamp(1, 100);
    let mut buf = Vec::new();

    let result = match format {
        OutputFormat::Png => image::codecs::png::PngEncoder::new(&mut buf).write_image(
            rgba.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        ),
        OutputFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(rgba.clone()).into_rgb8();
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
        OutputFormat::Webp => image::codecs::webp::WebPEncoder::new_lossless(&mut buf)
            .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8),
        OutputFormat::Tiff => {
            let mut cursor = Cursor::new(Vec::new());
            let result = image::codecs::tiff::TiffEncoder::new(&mut cursor).write_image(
                rgba.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            );
            buf = cursor.into_inner();
            result
        }
        // speed 6 matches rav1e's throughput sweet spot for single images
        OutputFormat::Avif => {
            image::codecs::avif::AvifEncoder::new_with_speed_quality(&mut buf, 6, quality)
                .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
        }
    };

    result.map_err(|e| ImagingError::Encode(format!("{format:?} encode failed: {e}")))?;
    Ok(buf)
}
