//! Application configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a user file, if present, is merged on top of them.
//!
//! ## Config File Location
//!
//! `config.toml` in the working directory, or any file passed with
//! `--config`. A missing file is not an error: the stock defaults apply.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [library]
//! dir = "library"           # Where squared photos are saved
//! format = "png"            # png | jpeg | webp | tiff | avif
//! quality = 90              # JPEG/AVIF quality (1-100)
//! suffix = "-square"        # Appended to the picked file's stem
//!
//! [picker]
//! max_canvas_pixels = 100000000  # Largest padded canvas, side x side (0 = no limit)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [library]
//! format = "jpeg"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Application configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Where and how squared photos are saved.
    pub library: LibraryConfig,
    /// Limits applied to picked images.
    pub picker: PickerConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.library.quality) {
            return Err(ConfigError::Validation(
                "library.quality must be 1-100".into(),
            ));
        }
        if self.library.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "library.dir must not be empty".into(),
            ));
        }
        if self.library.suffix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "library.suffix must not contain path separators".into(),
            ));
        }
        Ok(())
    }

    /// Settings that are valid but have no effect, as human-readable notes.
    pub fn warnings(&self) -> Vec<String> {
        let mut notes = Vec::new();
        let lib = &self.library;
        if !lib.format.is_lossy() && lib.quality != LibraryConfig::default().quality {
            notes.push(format!(
                "library.quality = {} is ignored: {} output is lossless",
                lib.quality,
                lib.format.extension()
            ));
        }
        notes
    }
}

/// Photo library settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Directory squared photos are written to. Created on first save.
    pub dir: String,
    /// Encoding for saved photos.
    pub format: OutputFormat,
    /// Lossy encoding quality (JPEG, AVIF).
    pub quality: u32,
    /// Appended to the source stem: `dawn.jpg` → `dawn-square.png`.
    pub suffix: String,
}

impl LibraryConfig {
    /// Quality as the encoders take it, clamped to 1–100.
    pub fn encoder_quality(&self) -> u8 {
        self.quality.clamp(1, 100) as u8
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            dir: "library".to_string(),
            format: OutputFormat::Png,
            quality: 90,
            suffix: "-square".to_string(),
        }
    }
}

/// Picker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Largest square canvas a pick may pad to, in pixels (side × side, where
    /// side is the longer edge). 0 disables the check.
    pub max_canvas_pixels: u64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_canvas_pixels: 100_000_000,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(AppConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<AppConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AppConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    let config = resolve_config(base, overlay)?;
    for note in config.warnings() {
        log::warn!("{}: {note}", path.display());
    }
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Instasquare Configuration
# =========================
#
# All options are optional. Values shown are the defaults.
# Unknown keys are rejected.

# ---------------------------------------------------------------------------
# Photo library: where squared photos are saved
# ---------------------------------------------------------------------------
[library]
# Directory to save into. Created on first save.
dir = "library"

# Output encoding: "png", "jpeg", "webp" (lossless), "tiff" or "avif".
format = "png"

# Quality for lossy formats (jpeg, avif), 1-100.
quality = 90

# Appended to the picked file's name: dawn.jpg -> dawn-square.png.
# Existing files are never overwritten; a counter is added instead.
suffix = "-square"

# ---------------------------------------------------------------------------
# Picker: limits on what can be picked
# ---------------------------------------------------------------------------
[picker]
# Largest square canvas a pick may be padded to, in pixels (side x side,
# where side is the picked photo's longer edge). A 4000x10 strip needs a
# 16000000 pixel canvas. 0 disables the limit.
max_canvas_pixels = 100000000
"##
}
