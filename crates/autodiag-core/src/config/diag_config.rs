//! Top-level autodiag configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ClassificationConfig, IsolationConfig, ObservabilityConfig, SessionConfig};
use crate::errors::ConfigError;
use crate::models::NormalizationMethod;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "autodiag.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`AUTODIAG_*`)
/// 3. Project config (`autodiag.toml` in the working root)
/// 4. User config (`~/.autodiag/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiagConfig {
    pub classification: ClassificationConfig,
    pub isolation: IsolationConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub model_pool_dir: Option<PathBuf>,
    pub max_graph_components: Option<usize>,
    pub show_graph_preview: Option<bool>,
    pub classification_log_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

impl DiagConfig {
    /// Load configuration from every layer rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_user_config(root, Self::user_config_path().as_deref(), cli_overrides)
    }

    /// Same as [`DiagConfig::load`] with an explicit user config location.
    pub fn load_with_user_config(
        root: &Path,
        user_config: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4: user config. A missing or unreadable file is skipped, bad TOML is not.
        if let Some(user_config_path) = user_config {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) | Err(ConfigError::FileNotFound { .. }) => {}
                    Err(e) => return Err(e),
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment
        Self::apply_env_overrides(&mut config);

        // Layer 1: CLI
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DiagConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.classification.single_score_threshold {
            if !(threshold > 0.0 && threshold < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "classification.single_score_threshold".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.isolation.max_graph_components == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "isolation.max_graph_components".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref level) = config.observability.log_level {
            if level.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_level".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".autodiag").join("config.toml"))
    }

    fn merge_toml_file(config: &mut DiagConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DiagConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut DiagConfig, other: &DiagConfig) {
        // Classification
        if other.classification.model_pool_dir.is_some() {
            base.classification.model_pool_dir = other.classification.model_pool_dir.clone();
        }
        if other.classification.single_score_threshold.is_some() {
            base.classification.single_score_threshold =
                other.classification.single_score_threshold;
        }
        if other.classification.anomaly_class_index.is_some() {
            base.classification.anomaly_class_index = other.classification.anomaly_class_index;
        }
        if other.classification.default_normalization.is_some() {
            base.classification.default_normalization =
                other.classification.default_normalization;
        }

        // Isolation
        if other.isolation.max_graph_components.is_some() {
            base.isolation.max_graph_components = other.isolation.max_graph_components;
        }
        if other.isolation.show_graph_preview.is_some() {
            base.isolation.show_graph_preview = other.isolation.show_graph_preview;
        }

        // Session
        if other.session.classification_log_path.is_some() {
            base.session.classification_log_path = other.session.classification_log_path.clone();
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
        if other.observability.json_logs.is_some() {
            base.observability.json_logs = other.observability.json_logs;
        }
    }

    /// Pattern: `AUTODIAG_MODEL_POOL_DIR`, `AUTODIAG_MAX_GRAPH_COMPONENTS`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut DiagConfig) {
        if let Ok(val) = std::env::var("AUTODIAG_MODEL_POOL_DIR") {
            config.classification.model_pool_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("AUTODIAG_SINGLE_SCORE_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.classification.single_score_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AUTODIAG_ANOMALY_CLASS_INDEX") {
            if let Ok(v) = val.parse::<usize>() {
                config.classification.anomaly_class_index = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AUTODIAG_DEFAULT_NORMALIZATION") {
            if let Some(v) = NormalizationMethod::from_str_name(&val) {
                config.classification.default_normalization = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AUTODIAG_MAX_GRAPH_COMPONENTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.isolation.max_graph_components = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AUTODIAG_SHOW_GRAPH_PREVIEW") {
            if let Ok(v) = val.parse::<bool>() {
                config.isolation.show_graph_preview = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AUTODIAG_CLASSIFICATION_LOG") {
            config.session.classification_log_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("AUTODIAG_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
        if let Ok(val) = std::env::var("AUTODIAG_JSON_LOGS") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json_logs = Some(v);
            }
        }
    }

    fn apply_cli_overrides(config: &mut DiagConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.model_pool_dir {
            config.classification.model_pool_dir = Some(v.clone());
        }
        if let Some(v) = cli.max_graph_components {
            config.isolation.max_graph_components = Some(v);
        }
        if let Some(v) = cli.show_graph_preview {
            config.isolation.show_graph_preview = Some(v);
        }
        if let Some(ref v) = cli.classification_log_path {
            config.session.classification_log_path = Some(v.clone());
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = Some(v.clone());
        }
        if let Some(v) = cli.json_logs {
            config.observability.json_logs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
