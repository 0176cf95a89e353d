//! Classification oracle configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::NormalizationMethod;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Directory holding `<component>.onnx` models and their `<component>.toml` metadata.
    pub model_pool_dir: Option<PathBuf>,
    /// Single-score models flag an anomaly at or below this score. Default: 0.5.
    pub single_score_threshold: Option<f64>,
    /// Output class treated as "anomaly" when metadata does not say otherwise. Default: 0.
    pub anomaly_class_index: Option<usize>,
    /// Normalization for models whose metadata omits one. Default: passthrough.
    pub default_normalization: Option<NormalizationMethod>,
}

impl ClassificationConfig {
    pub fn effective_model_pool_dir(&self) -> PathBuf {
        self.model_pool_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_MODEL_POOL_DIR))
    }

    pub fn effective_single_score_threshold(&self) -> f64 {
        self.single_score_threshold
            .unwrap_or(defaults::DEFAULT_SINGLE_SCORE_THRESHOLD)
    }

    pub fn effective_anomaly_class_index(&self) -> usize {
        self.anomaly_class_index
            .unwrap_or(defaults::DEFAULT_ANOMALY_CLASS_INDEX)
    }

    pub fn effective_default_normalization(&self) -> NormalizationMethod {
        self.default_normalization.unwrap_or_default()
    }
}
