//! Stable error code strings for every error enum.

/// Maps an error to a stable, machine-readable code.
pub trait DiagErrorCode {
    /// Returns the error code string (e.g. "MODEL_UNAVAILABLE").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MODEL_UNAVAILABLE: &str = "MODEL_UNAVAILABLE";
pub const INVALID_MODEL_SHAPE: &str = "INVALID_MODEL_SHAPE";
pub const RECORDING_ACQUISITION_FAILED: &str = "RECORDING_ACQUISITION_FAILED";
pub const INFERENCE_FAILED: &str = "INFERENCE_FAILED";
pub const INVALID_SIGNAL: &str = "INVALID_SIGNAL";
pub const GRAPH_UNAVAILABLE: &str = "GRAPH_UNAVAILABLE";
pub const EXPANSION_LIMIT: &str = "EXPANSION_LIMIT";
pub const CYCLE_DETECTED: &str = "CYCLE_DETECTED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SESSION_ERROR: &str = "SESSION_ERROR";
pub const INPUT_CLOSED: &str = "INPUT_CLOSED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const PRESENTATION_FAILED: &str = "PRESENTATION_FAILED";
