use crate::errors::ClassificationError;
use crate::models::TimeSeries;

/// Supplies recorded signals (oscillograms).
pub trait ISignalAccessor: Send + Sync {
    /// Blocks until a recording for `component` is available.
    fn get_recording(&self, component: &str) -> Result<TimeSeries, ClassificationError>;
}
