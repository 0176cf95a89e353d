//! Signal recordings stored as `<dir>/<component>.json`.

use std::fs;
use std::path::{Path, PathBuf};

use autodiag_core::errors::ClassificationError;
use autodiag_core::models::{Channel, TimeSeries};
use autodiag_core::traits::ISignalAccessor;
use serde::Deserialize;

/// A recording file holds either a full time series or a bare channel list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordingFile {
    Channels { channels: Vec<Channel> },
    Samples(Vec<f64>),
}

/// Reads previously captured oscillograms from a directory.
#[derive(Debug, Clone)]
pub struct LocalRecordingStore {
    dir: PathBuf,
}

impl LocalRecordingStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn recording_path(&self, component: &str) -> PathBuf {
        self.dir.join(format!("{component}.json"))
    }
}

impl ISignalAccessor for LocalRecordingStore {
    fn get_recording(&self, component: &str) -> Result<TimeSeries, ClassificationError> {
        let path = self.recording_path(component);
        let failed = |reason: String| ClassificationError::RecordingAcquisitionFailed {
            component: component.to_string(),
            reason,
        };
        let content = fs::read_to_string(&path)
            .map_err(|e| failed(format!("{}: {e}", path.display())))?;
        let file: RecordingFile =
            serde_json::from_str(&content).map_err(|e| failed(e.to_string()))?;
        Ok(match file {
            RecordingFile::Channels { channels } => TimeSeries::multivariate(component, channels),
            RecordingFile::Samples(samples) => TimeSeries::univariate(component, samples),
        })
    }
}
