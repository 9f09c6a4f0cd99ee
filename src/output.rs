//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Square
//!
//! ```text
//! Selected wide.jpg
//!     Original: 300x150
//!     Squared: 300x300
//! Saved library/wide-square.png (300x300)
//! ```
//!
//! A dismissed or failed pick shows why nothing was selected:
//!
//! ```text
//! No image selected
//!     Reason: Failed to load picked asset: photo.jpg: No such file or directory
//! ```
//!
//! ## Check
//!
//! ```text
//! wide.jpg
//!     Size: 300x150
//!     Canvas: 300x300 (margin right 0, bottom 150)
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::imaging::{Dimensions, canvas_side, placement_offset};
use crate::library::SavedAsset;
use crate::studio::SelectionReport;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Selection
// ============================================================================

/// Format the result of a picker session.
pub fn format_selection(report: &SelectionReport) -> Vec<String> {
    match report {
        SelectionReport::Selected {
            source,
            original,
            padded,
        } => {
            let mut lines = vec![format!("Selected {source}")];
            lines.push(format!("{}Original: {original}", indent(1)));
            if original == padded {
                lines.push(format!("{}Squared: {padded} (already square)", indent(1)));
            } else {
                lines.push(format!("{}Squared: {padded}", indent(1)));
            }
            lines
        }
        SelectionReport::Cancelled => vec!["No image selected (picker dismissed)".to_string()],
        SelectionReport::Failed { reason } => vec![
            "No image selected".to_string(),
            format!("{}Reason: {reason}", indent(1)),
        ],
    }
}

pub fn print_selection(report: &SelectionReport) {
    for line in format_selection(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Save
// ============================================================================

/// Format the result of a save request.
pub fn format_saved(saved: Option<&SavedAsset>) -> Vec<String> {
    match saved {
        Some(asset) => vec![format!(
            "Saved {} ({}x{})",
            asset.location, asset.width, asset.height
        )],
        None => vec!["Nothing to save".to_string()],
    }
}

pub fn print_saved(saved: Option<&SavedAsset>) {
    for line in format_saved(saved) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the canvas a source would get, without producing it.
pub fn format_check(source: &str, dims: Dimensions) -> Vec<String> {
    let side = canvas_side(dims.width, dims.height);
    let (x, y) = placement_offset((dims.width, dims.height), side);
    let right = side - x - dims.width;
    let bottom = side - y - dims.height;

    let canvas = if dims.is_square() {
        format!("{}Canvas: {side}x{side} (already square)", indent(1))
    } else {
        format!("{}Canvas: {side}x{side} (margin right {right}, bottom {bottom})", indent(1))
    };
    vec![
        source.to_string(),
        format!("{}Size: {dims}", indent(1)),
        canvas,
    ]
}

pub fn print_check(source: &str, dims: Dimensions) {
    for line in format_check(source, dims) {
        println!("{}", line);
    }
}
