//! Error handling for autodiag.
//! One error enum per subsystem, `thiserror` only. Aggregated by [`DiagError`].

pub mod classification_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod session_error;

pub use classification_error::ClassificationError;
pub use config_error::ConfigError;
pub use error_code::DiagErrorCode;
pub use graph_error::GraphError;
pub use session_error::SessionError;

/// Top-level error for every fallible autodiag operation.
#[derive(Debug, thiserror::Error)]
pub enum DiagError {
    #[error("classification error: {0}")]
    ClassificationError(#[from] ClassificationError),

    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("session error: {0}")]
    SessionError(#[from] SessionError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("presentation failed: {reason}")]
    PresentationFailed { reason: String },
}

/// Convenience alias used across the workspace.
pub type DiagResult<T> = Result<T, DiagError>;

impl DiagErrorCode for DiagError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ClassificationError(e) => e.error_code(),
            Self::GraphError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::SessionError(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
            Self::PresentationFailed { .. } => error_code::PRESENTATION_FAILED,
        }
    }
}
