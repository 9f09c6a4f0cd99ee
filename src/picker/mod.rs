//! Photo picker boundary.
//!
//! The host owns the actual picking UI. This module defines what the rest of
//! the crate asks of it ([`PhotoPicker`]) and how a pick comes back
//! ([`PickerSession`] → [`PickOutcome`]).
//!
//! ## Session lifecycle
//!
//! ```text
//! Studio::select_image ──► PickerSession::begin ──► worker thread
//!                                                     │ picker.pick(request)
//!                                                     │ first asset only
//!                                                     │ decode + pad
//!            PickerSession::wait ◄── mpsc channel ◄───┘ exactly one PickOutcome
//! ```
//!
//! The worker never touches selection state; it only sends. The thread that
//! owns the state receives the outcome and applies it, so there is a single
//! writer without any locking.

pub mod file_picker;
mod session;

use crate::imaging::{Dimensions, Image, ImagingError};
use thiserror::Error;

pub use file_picker::FilePicker;
pub use session::PickerSession;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Picker unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to load picked asset: {0}")]
    Load(String),
    #[error("Picked asset is not a usable image: {0}")]
    Imaging(#[from] ImagingError),
    #[error("Picker closed without reporting a result")]
    Disconnected,
}

/// Media types a pick may be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFilter {
    Images,
}

/// What the picker is asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    pub media: MediaFilter,
    pub selection_limit: usize,
}

impl PickRequest {
    /// One still image. The only request the crate ever issues.
    pub fn single_image() -> Self {
        Self {
            media: MediaFilter::Images,
            selection_limit: 1,
        }
    }
}

/// An encoded asset as handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedAsset {
    /// Filename or asset identifier, used for logging and save naming.
    pub source_hint: String,
    pub bytes: Vec<u8>,
}

/// Host capability: let the user choose images from their library.
///
/// Implementations block until the user is done. An empty selection means
/// the user cancelled. Hosts may return more assets than
/// [`PickRequest::selection_limit`]; the session only ever uses the first.
pub trait PhotoPicker: Send + Sync + 'static {
    fn pick(&self, request: &PickRequest) -> Result<Vec<PickedAsset>, PickerError>;
}

/// A picked image after decode and square padding.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedImage {
    pub source_hint: String,
    /// Upright dimensions before padding.
    pub original: Dimensions,
    /// The padded, square image.
    pub image: Image,
}

/// How a picker session ended.
#[derive(Debug)]
pub enum PickOutcome {
    Selected(PickedImage),
    Cancelled,
    Failed(PickerError),
}

impl PickOutcome {
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}
