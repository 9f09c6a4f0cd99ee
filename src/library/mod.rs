//! Photo library boundary.
//!
//! [`PhotoLibrary`] is the host's write capability. Unlike a fire-and-forget
//! save, every write reports back: callers get a [`SavedAsset`] describing
//! where the image went, or a [`SaveError`] saying why it didn't.

pub mod directory;

use crate::imaging::{Image, ImagingError};
use serde::Serialize;
use thiserror::Error;

pub use directory::DirectoryLibrary;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not encode image: {0}")]
    Imaging(#[from] ImagingError),
    #[error("Library unavailable: {0}")]
    Unavailable(String),
}

/// Where a saved image ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedAsset {
    /// Host-specific location: a file path, an asset identifier, …
    pub location: String,
    pub width: u32,
    pub height: u32,
}

/// Host capability: persist an image to the user's photo library.
///
/// `name_hint` is the picked asset's name; hosts may use it to name the
/// new asset or ignore it.
pub trait PhotoLibrary: Send + Sync {
    fn write(&self, image: &Image, name_hint: &str) -> Result<SavedAsset, SaveError>;
}
