//! Metadata describing a trained anomaly model and the preprocessing it expects.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ANOMALY_CLASS_INDEX;

/// Normalization applied to a signal before inference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationMethod {
    /// Passthrough.
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "z_norm", alias = "z_score")]
    ZScore,
    #[serde(rename = "min_max_norm", alias = "min_max")]
    MinMax,
    #[serde(rename = "dec_norm", alias = "decimal_scaling")]
    DecimalScaling,
    #[serde(rename = "log_norm", alias = "logarithmic")]
    Logarithmic,
}

impl NormalizationMethod {
    pub const ALL: [NormalizationMethod; 5] = [
        Self::None,
        Self::ZScore,
        Self::MinMax,
        Self::DecimalScaling,
        Self::Logarithmic,
    ];

    /// Parse from string (matching the serde rename). Unknown names yield `None`.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "z_norm" | "z_score" => Some(Self::ZScore),
            "min_max_norm" | "min_max" => Some(Self::MinMax),
            "dec_norm" | "decimal_scaling" => Some(Self::DecimalScaling),
            "log_norm" | "logarithmic" => Some(Self::Logarithmic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ZScore => "z_norm",
            Self::MinMax => "min_max_norm",
            Self::DecimalScaling => "dec_norm",
            Self::Logarithmic => "log_norm",
        }
    }
}

impl std::fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_anomaly_class_index() -> usize {
    DEFAULT_ANOMALY_CLASS_INDEX
}

/// Metadata shipped alongside a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_id: String,
    #[serde(default)]
    pub normalization_method: NormalizationMethod,
    /// Number of samples the model consumes per channel.
    pub input_length: usize,
    #[serde(default = "default_anomaly_class_index")]
    pub anomaly_class_index: usize,
}

impl ModelMetadata {
    pub fn new(model_id: impl Into<String>, input_length: usize) -> Self {
        Self {
            model_id: model_id.into(),
            normalization_method: NormalizationMethod::None,
            input_length,
            anomaly_class_index: DEFAULT_ANOMALY_CLASS_INDEX,
        }
    }

    pub fn with_normalization(mut self, method: NormalizationMethod) -> Self {
        self.normalization_method = method;
        self
    }
}

/// Tensor shape with `None` marking a dynamic dimension (usually the batch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorShape(pub Vec<Option<usize>>);

impl TensorShape {
    pub fn new(dims: Vec<Option<usize>>) -> Self {
        Self(dims)
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Fixed size of dimension `i`, `None` if dynamic or out of range.
    pub fn dim(&self, i: usize) -> Option<usize> {
        self.0.get(i).copied().flatten()
    }
}

impl std::fmt::Display for TensorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims: Vec<String> = self
            .0
            .iter()
            .map(|d| d.map_or_else(|| "None".to_string(), |v| v.to_string()))
            .collect();
        write!(f, "({})", dims.join(", "))
    }
}
