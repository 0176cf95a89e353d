//! Append-only JSON log of classification records.

use std::fs;
use std::path::{Path, PathBuf};

use autodiag_core::errors::{DiagResult, SessionError};
use autodiag_core::models::ClassificationRecord;
use tracing::debug;

/// A JSON array of [`ClassificationRecord`]s on disk. Records are only ever appended.
#[derive(Debug, Clone)]
pub struct ClassificationLog {
    path: PathBuf,
}

impl ClassificationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every record written so far; a missing file is an empty log.
    pub fn load_all(&self) -> DiagResult<Vec<ClassificationRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| SessionError::ReadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Append `records` and rewrite the document.
    pub fn append(&self, records: &[ClassificationRecord]) -> DiagResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        let mut all = self.load_all()?;
        all.extend_from_slice(records);
        self.save_all(&all)?;
        debug!(path = %self.path.display(), appended = records.len(), total = all.len(), "classification log updated");
        Ok(())
    }

    fn save_all(&self, records: &[ClassificationRecord]) -> DiagResult<()> {
        let write_failed = |reason: String| SessionError::LogWriteFailed {
            path: self.path.display().to_string(),
            reason,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json).map_err(|e| write_failed(e.to_string()))?;
        Ok(())
    }
}
