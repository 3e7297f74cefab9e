//! On-disk high score store
//!
//! Writes a small versioned JSON envelope through a temp file and a rename so
//! a crash mid-write leaves the previous record intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::HighScoreStore;

/// Envelope format version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("unsupported high score format version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    high_score: u32,
}

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score; a missing file is 0, not an error
    pub fn load(&self) -> Result<u32, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let envelope: Envelope = serde_json::from_str(&json)?;
        if envelope.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(envelope.version));
        }
        Ok(envelope.high_score)
    }

    pub fn save(&self, high_score: u32) -> Result<(), StoreError> {
        let envelope = Envelope {
            version: FORMAT_VERSION,
            high_score,
        };
        let json = serde_json::to_string(&envelope)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl HighScoreStore for FileStore {
    fn get_high_score(&self) -> u32 {
        match self.load() {
            Ok(score) => score,
            Err(e) => {
                log::warn!("Ignoring stored high score at {}: {e}", self.path.display());
                0
            }
        }
    }

    fn set_high_score(&mut self, score: u32) {
        match self.save(score) {
            Ok(()) => log::info!("High score {score} saved to {}", self.path.display()),
            Err(e) => log::warn!("Could not save high score: {e}"),
        }
    }
}
