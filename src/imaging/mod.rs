//! Image handling in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `ImageReader::into_decoder` + `DynamicImage::apply_orientation` |
//! | **Square pad** | `RgbaImage::from_pixel` + `imageops::replace` |
//! | **Encode** | `image::codecs::{png, jpeg, webp, tiff, avif}` |
//!
//! The module is split into:
//! - **Raster**: [`Image`], [`FillColor`], [`Dimensions`]
//! - **Calculations**: pure canvas geometry (unit testable)
//! - **Square**: [`pad`] / [`pad_with`], the square-padding transform
//! - **Codec**: bytes ↔ [`Image`] for the picker and library boundaries,
//!   with EXIF rotation applied on decode

mod calculations;
pub mod codec;
mod raster;
mod square;

use thiserror::Error;

pub use calculations::{canvas_exceeds_limit, canvas_side, placement_offset};
pub use codec::{OutputFormat, decode, encode, supported_input_formats};
pub use raster::{Dimensions, FillColor, Image};
pub use square::{pad, pad_with};

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("Invalid image: {width}x{height} has no area")]
    InvalidImage { width: u32, height: u32 },
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Too large: {width}x{height} pads to a {side}x{side} canvas, over the {limit} pixel limit")]
    TooLarge {
        width: u32,
        height: u32,
        side: u32,
        limit: u64,
    },
    #[error("Encode failed: {0}")]
    Encode(String),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
