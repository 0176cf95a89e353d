//! Errors raised by the session stages surrounding fault isolation.

use super::error_code::{self, DiagErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no suspect components known for DTC {dtc}")]
    NoSuspectComponents { dtc: String },

    #[error("failed to write classification log {path}: {reason}")]
    LogWriteFailed { path: String, reason: String },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("operator input closed while waiting for {prompt}")]
    InputClosed { prompt: String },
}

impl DiagErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InputClosed { .. } => error_code::INPUT_CLOSED,
            _ => error_code::SESSION_ERROR,
        }
    }
}
