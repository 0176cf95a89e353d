//! Logging configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `AUTODIAG_LOG` is unset. Default: "info".
    pub log_level: Option<String>,
    /// Emit JSON log lines instead of human-readable ones. Default: false.
    pub json_logs: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_LOG_LEVEL.to_string())
    }

    pub fn effective_json_logs(&self) -> bool {
        self.json_logs.unwrap_or(defaults::DEFAULT_JSON_LOGS)
    }
}
