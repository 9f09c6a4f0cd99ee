//! # Instasquare
//!
//! Pick a photo, pad it to a square canvas with a white background, and save
//! it back to the photo library, ready for square-only feeds.
//!
//! # Architecture: Pick → Pad → Save
//!
//! ```text
//! 1. Pick   host picker  →  PickedAsset   (encoded bytes, at most one)
//! 2. Pad    PickedAsset  →  Image         (decode, orient, square canvas)
//! 3. Save   Image        →  SavedAsset    (host photo library)
//! ```
//!
//! The host platform owns the picking UI and the photo library. This crate
//! talks to both through traits ([`picker::PhotoPicker`],
//! [`library::PhotoLibrary`]), so the whole flow runs and tests without a UI.
//! The binary ships a command-line host for each.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | `Image` type, square padding, decode/encode, EXIF orientation |
//! | [`picker`] | Picker capability trait and one-shot picker sessions |
//! | [`library`] | Photo library capability trait and the directory-backed library |
//! | [`studio`] | Selection state machine and the pick → save flow |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Origin Placement
//!
//! The photo is anchored at the top-left corner and the margin goes on the
//! right or bottom, rather than centering. Squared photos already published
//! with this tool look that way, and re-running it on its own output is a
//! no-op. The decision lives in one place,
//! [`imaging::placement_offset`].
//!
//! ## Sessions Over Callbacks
//!
//! A pick is a [`picker::PickerSession`]: a worker thread that sends exactly
//! one [`picker::PickOutcome`] over a channel. The thread that owns the
//! [`studio::SelectionState`] receives it and applies it, so state has a
//! single writer and there are no back-references from the picker into the
//! app.
//!
//! ## Failures Are Visible
//!
//! A failed pick is reported as "no image selected" with the reason; a failed
//! save is an error, never a silent success.

pub mod config;
pub mod imaging;
pub mod library;
pub mod output;
pub mod picker;
pub mod studio;

#[cfg(test)]
pub(crate) mod test_helpers;
