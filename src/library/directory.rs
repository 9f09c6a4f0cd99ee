//! Command-line host library: squared photos land in a directory.

use super::{PhotoLibrary, SaveError, SavedAsset};
use crate::config::LibraryConfig;
use crate::imaging::{Image, OutputFormat, encode};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Gives up after this many `name-N` candidates are all taken.
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Saves images as files in one directory.
///
/// Files are named `<stem><suffix>.<ext>` after the picked asset. Existing
/// files are never overwritten: a taken name gets `-2`, `-3`, … appended.
#[derive(Debug, Clone)]
pub struct DirectoryLibrary {
    dir: PathBuf,
    format: OutputFormat,
    quality: u8,
    suffix: String,
}

impl DirectoryLibrary {
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat, quality: u8) -> Self {
        Self {
            dir: dir.into(),
            format,
            quality,
            suffix: "-square".to_string(),
        }
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
            format: config.format,
            quality: config.encoder_quality(),
            suffix: config.suffix.clone(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Candidate file name for the `attempt`-th try (1-based).
    fn candidate_name(&self, stem: &str, attempt: u32) -> String {
        let ext = self.format.extension();
        if attempt == 1 {
            format!("{stem}{}.{ext}", self.suffix)
        } else {
            format!("{stem}{}-{attempt}.{ext}", self.suffix)
        }
    }
}

/// File stem of a name hint, or `"photo"` when there is nothing usable.
fn stem_of(name_hint: &str) -> String {
    Path::new(name_hint)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "photo".to_string())
}

impl PhotoLibrary for DirectoryLibrary {
    fn write(&self, image: &Image, name_hint: &str) -> Result<SavedAsset, SaveError> {
        let bytes = encode(image, self.format, self.quality)?;
        std::fs::create_dir_all(&self.dir)?;

        let stem = stem_of(name_hint);
        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let path = self.dir.join(self.candidate_name(&stem, attempt));
            // create_new makes "check then write" atomic
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(SaveError::Io(e)),
            };
            file.write_all(&bytes)?;
            file.sync_all()?;

            log::info!("saved {} ({} bytes)", path.display(), bytes.len());
            return Ok(SavedAsset {
                location: path.display().to_string(),
                width: image.width(),
                height: image.height(),
            });
        }

        Err(SaveError::Unavailable(format!(
            "no free name for {stem} in {}",
            self.dir.display()
        )))
    }
}
