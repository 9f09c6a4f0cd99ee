//! In-memory raster types shared by every stage.
//!
//! - [`Image`]: an immutable RGBA8 bitmap with positive width and height.
//! - [`FillColor`]: the color used for canvas area not covered by the source.
//! - [`Dimensions`]: a plain width/height pair for reports and calculations.

use super::ImagingError;
use image::{DynamicImage, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn is_square(self) -> bool {
        self.width == self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A decoded raster image.
///
/// Pixels are always stored as RGBA8 regardless of the source format, so
/// compositing never has to match up color types. An `Image` cannot be empty:
/// both constructors reject zero width or zero height. Nothing hands out
/// mutable access, so transforms always produce a new `Image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: RgbaImage,
}

impl Image {
    /// Wrap an RGBA buffer, rejecting zero-area input.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self, ImagingError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(ImagingError::InvalidImage { width, height });
        }
        Ok(Self { pixels })
    }

    /// Convert any decoded image to RGBA8, rejecting zero-area input.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self, ImagingError> {
        Self::from_rgba(img.into_rgba8())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Pixel at `(x, y)`. Panics when out of bounds, like `image::ImageBuffer`.
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Canvas fill color (RGBA). Defaults to opaque white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillColor(pub [u8; 4]);

impl FillColor {
    pub const WHITE: FillColor = FillColor([255, 255, 255, 255]);

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba(self.0)
    }
}

impl Default for FillColor {
    fn default() -> Self {
        Self::WHITE
    }
}
