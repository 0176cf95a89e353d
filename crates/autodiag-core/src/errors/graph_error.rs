//! Structural graph errors. Fatal to the current isolation run.

use super::error_code::{self, DiagErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("structural graph provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },

    #[error("graph expansion exceeded {limit} components")]
    ExpansionLimitExceeded { limit: usize },

    #[error("cycle detected in structural graph: {path}")]
    CycleDetected { path: String },
}

impl DiagErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderUnavailable { .. } => error_code::GRAPH_UNAVAILABLE,
            Self::ExpansionLimitExceeded { .. } => error_code::EXPANSION_LIMIT,
            Self::CycleDetected { .. } => error_code::CYCLE_DETECTED,
        }
    }
}
