//! Command-line host picker: the "user's choice" is a path given up front.

use super::{PhotoPicker, PickRequest, PickedAsset, PickerError};
use std::path::PathBuf;

/// Picks a single file from disk.
///
/// A picker with no path behaves like a user dismissing the sheet: it
/// returns an empty selection.
#[derive(Debug, Clone, Default)]
pub struct FilePicker {
    path: Option<PathBuf>,
}

impl FilePicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A picker the user always dismisses.
    pub fn dismissed() -> Self {
        Self::default()
    }
}

impl PhotoPicker for FilePicker {
    fn pick(&self, request: &PickRequest) -> Result<Vec<PickedAsset>, PickerError> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };
        if request.selection_limit == 0 {
            return Ok(Vec::new());
        }

        let bytes = std::fs::read(path)
            .map_err(|e| PickerError::Load(format!("{}: {e}", path.display())))?;
        let source_hint = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(vec![PickedAsset { source_hint, bytes }])
    }
}
