//! Recorded sensor signals (oscillograms).

use serde::{Deserialize, Serialize};

use crate::constants::MIN_SAMPLES_PER_CHANNEL;
use crate::errors::ClassificationError;

/// One recorded channel: voltage samples over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Optional measurement point name (e.g. "Plusleitung der Lambdasonde").
    #[serde(default)]
    pub name: Option<String>,
    pub samples: Vec<f64>,
}

impl Channel {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            name: None,
            samples,
        }
    }

    pub fn named(name: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            name: Some(name.into()),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A recording for one component, with one or more channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub component: String,
    pub channels: Vec<Channel>,
}

impl TimeSeries {
    /// Single-channel recording.
    pub fn univariate(component: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            component: component.into(),
            channels: vec![Channel::new(samples)],
        }
    }

    pub fn multivariate(component: impl Into<String>, channels: Vec<Channel>) -> Self {
        Self {
            component: component.into(),
            channels,
        }
    }

    pub fn is_multivariate(&self) -> bool {
        self.channels.len() > 1
    }

    /// Check the recording is usable as classifier input.
    ///
    /// # Errors
    /// `InvalidSignal` if there are no channels, a channel is too short, or a sample is not finite.
    pub fn validate(&self) -> Result<(), ClassificationError> {
        if self.channels.is_empty() {
            return Err(ClassificationError::InvalidSignal {
                reason: format!("recording for {} has no channels", self.component),
            });
        }
        for (i, channel) in self.channels.iter().enumerate() {
            if channel.len() < MIN_SAMPLES_PER_CHANNEL {
                return Err(ClassificationError::InvalidSignal {
                    reason: format!(
                        "channel {i} of {} has {} samples, need at least {MIN_SAMPLES_PER_CHANNEL}",
                        self.component,
                        channel.len()
                    ),
                });
            }
            if channel.samples.iter().any(|s| !s.is_finite()) {
                return Err(ClassificationError::InvalidSignal {
                    reason: format!("channel {i} of {} contains non-finite samples", self.component),
                });
            }
        }
        Ok(())
    }
}
