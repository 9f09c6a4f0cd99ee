//! Selection state and the pick → pad → save flow.
//!
//! [`SelectionState`] is the whole of the app's mutable state: the current
//! squared image (if any) and whether a picker is open. It is a plain owned
//! value, never ambient, so it can be built, inspected and driven in tests
//! without a UI.
//!
//! ## Phases
//!
//! ```text
//!            select_image                 Selected
//!   Idle ─────────────────► PickerOpen ─────────────► ImageReady
//!    ▲                          │  ▲                    │    │
//!    └──── Cancelled/Failed ────┘  └──── select_image ──┘    │ save
//!          (nothing held)                                     ▼
//!                                                   (no transition)
//! ```
//!
//! A cancelled or failed pick closes the picker and keeps whatever was held
//! before, so it lands in ImageReady when an earlier image exists.
//!
//! [`Studio`] owns one `SelectionState` together with the two host
//! capabilities. All mutation goes through `&mut Studio`, which makes the
//! owning thread the single writer; picker sessions only ever send.

use crate::imaging::{Dimensions, Image};
use crate::library::{PhotoLibrary, SaveError, SavedAsset};
use crate::picker::{PhotoPicker, PickOutcome, PickedImage, PickerSession};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateError {
    #[error("A picker is already open")]
    PickerOpen,
    #[error("No picker is open")]
    PickerNotOpen,
}

#[derive(Error, Debug)]
pub enum StudioError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error("Save failed: {0}")]
    Save(#[from] SaveError),
}

/// Where the app is in the pick → save flow. Derived from [`SelectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    PickerOpen,
    ImageReady,
}

/// What a finished picker session did to the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum SelectionReport {
    Selected {
        source: String,
        original: Dimensions,
        padded: Dimensions,
    },
    Cancelled,
    Failed {
        reason: String,
    },
}

/// The current image plus the picker-visibility flag.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Option<PickedImage>,
    picker_open: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.picker_open, &self.current) {
            (true, _) => Phase::PickerOpen,
            (false, Some(_)) => Phase::ImageReady,
            (false, None) => Phase::Idle,
        }
    }

    pub fn current(&self) -> Option<&Image> {
        self.current.as_ref().map(|picked| &picked.image)
    }

    pub fn current_pick(&self) -> Option<&PickedImage> {
        self.current.as_ref()
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// Idle/ImageReady → PickerOpen.
    pub fn open_picker(&mut self) -> Result<(), StateError> {
        if self.picker_open {
            return Err(StateError::PickerOpen);
        }
        self.picker_open = true;
        Ok(())
    }

    /// Close the picker and apply how the session ended.
    ///
    /// Only a selection replaces the held image; the previous one is dropped.
    pub fn complete(&mut self, outcome: PickOutcome) -> Result<SelectionReport, StateError> {
        if !self.picker_open {
            return Err(StateError::PickerNotOpen);
        }
        self.picker_open = false;

        Ok(match outcome {
            PickOutcome::Selected(picked) => {
                let report = SelectionReport::Selected {
                    source: picked.source_hint.clone(),
                    original: picked.original,
                    padded: picked.image.dimensions(),
                };
                self.current = Some(picked);
                report
            }
            PickOutcome::Cancelled => SelectionReport::Cancelled,
            PickOutcome::Failed(e) => SelectionReport::Failed {
                reason: e.to_string(),
            },
        })
    }
}

/// Owns the selection state and the host capabilities.
pub struct Studio<P: PhotoPicker, L: PhotoLibrary> {
    picker: Arc<P>,
    library: L,
    state: SelectionState,
    max_canvas_pixels: u64,
}

impl<P: PhotoPicker, L: PhotoLibrary> Studio<P, L> {
    pub fn new(picker: P, library: L) -> Self {
        Self::with_state(picker, library, SelectionState::new())
    }

    /// Resume from an existing state.
    pub fn with_state(picker: P, library: L, state: SelectionState) -> Self {
        Self {
            picker: Arc::new(picker),
            library,
            state,
            max_canvas_pixels: 0,
        }
    }

    /// Refuse picks whose padded canvas exceeds `max_pixels` (0 = unlimited).
    pub fn with_max_canvas_pixels(mut self, max_pixels: u64) -> Self {
        self.max_canvas_pixels = max_pixels;
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    /// Hand the state back, e.g. to keep it across a host restart of the flow.
    pub fn into_state(self) -> SelectionState {
        self.state
    }

    /// Open the picker and start a session on a worker thread.
    pub fn select_image(&mut self) -> Result<PickerSession, StudioError> {
        self.state.open_picker()?;
        log::debug!("picker opened");
        Ok(PickerSession::begin(
            Arc::clone(&self.picker),
            self.max_canvas_pixels,
        ))
    }

    /// Apply an outcome received from a session (e.g. via `try_outcome`).
    pub fn apply_outcome(&mut self, outcome: PickOutcome) -> Result<SelectionReport, StudioError> {
        let report = self.state.complete(outcome)?;
        if let SelectionReport::Failed { reason } = &report {
            log::warn!("no image selected: {reason}");
        }
        Ok(report)
    }

    /// Wait for a session to end and apply its outcome.
    pub fn finish_selection(
        &mut self,
        session: PickerSession,
    ) -> Result<SelectionReport, StudioError> {
        let outcome = session.wait();
        self.apply_outcome(outcome)
    }

    /// Open the picker, wait for the user, and apply the result.
    pub fn pick(&mut self) -> Result<SelectionReport, StudioError> {
        let session = self.select_image()?;
        self.finish_selection(session)
    }

    /// Save the held image to the library.
    ///
    /// Returns `Ok(None)` without touching the library when nothing is held.
    /// Saving never changes the phase.
    pub fn save(&mut self) -> Result<Option<SavedAsset>, StudioError> {
        if self.state.is_picker_open() {
            return Err(StateError::PickerOpen.into());
        }
        let Some(picked) = self.state.current_pick() else {
            log::info!("save requested with no image selected");
            return Ok(None);
        };

        match self.library.write(&picked.image, &picked.source_hint) {
            Ok(saved) => Ok(Some(saved)),
            Err(e) => {
                log::warn!("saving {} failed: {e}", picked.source_hint);
                Err(e.into())
            }
        }
    }
}
