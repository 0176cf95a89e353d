//! Component-level classification failures.
//!
//! None of these abort an isolation run: the oracle falls back to a manual verdict.

use super::error_code::{self, DiagErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("no compatible model available for component {component}")]
    ModelUnavailable { component: String },

    #[error("invalid model shape for component {component}: {reason}")]
    InvalidModelShape { component: String, reason: String },

    #[error("recording acquisition failed for component {component}: {reason}")]
    RecordingAcquisitionFailed { component: String, reason: String },

    #[error("model inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("invalid signal: {reason}")]
    InvalidSignal { reason: String },
}

impl DiagErrorCode for ClassificationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ModelUnavailable { .. } => error_code::MODEL_UNAVAILABLE,
            Self::InvalidModelShape { .. } => error_code::INVALID_MODEL_SHAPE,
            Self::RecordingAcquisitionFailed { .. } => error_code::RECORDING_ACQUISITION_FAILED,
            Self::InferenceFailed { .. } => error_code::INFERENCE_FAILED,
            Self::InvalidSignal { .. } => error_code::INVALID_SIGNAL,
        }
    }
}
