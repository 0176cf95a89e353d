//! Session stage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Where classification records are appended. Default: `session_files/classifications.json`.
    pub classification_log_path: Option<PathBuf>,
}

impl SessionConfig {
    pub fn effective_classification_log_path(&self) -> PathBuf {
        self.classification_log_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_CLASSIFICATION_LOG_PATH))
    }
}
