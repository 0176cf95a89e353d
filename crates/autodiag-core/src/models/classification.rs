//! Verdicts, classification records, and the classified-components mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a verdict was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    /// Trained model inference on a recorded signal.
    Model,
    /// Hand-written signal rules for a known component.
    RuleBased,
    /// Operator judgement.
    Manual,
    /// Handed in by an earlier stage; origin unknown to the isolation run.
    Prior,
}

impl ClassificationMethod {
    pub fn is_automated(&self) -> bool {
        matches!(self, Self::Model | Self::RuleBased)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::RuleBased => "rule_based",
            Self::Manual => "manual",
            Self::Prior => "prior",
        }
    }
}

impl std::fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which stage of the diagnosis produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisStage {
    ComponentClassification,
    FaultIsolation,
}

/// The outcome of classifying one component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// `true` = anomaly present.
    pub anomaly: bool,
    pub method: ClassificationMethod,
    /// Raw model score backing the verdict, when there is one.
    pub score: Option<f64>,
}

impl Verdict {
    pub fn new(anomaly: bool, method: ClassificationMethod) -> Self {
        Self {
            anomaly,
            method,
            score: None,
        }
    }

    pub fn manual(anomaly: bool) -> Self {
        Self::new(anomaly, ClassificationMethod::Manual)
    }

    pub fn prior(anomaly: bool) -> Self {
        Self::new(anomaly, ClassificationMethod::Prior)
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// Context the diagnosis is running under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticContext {
    /// The trouble code currently being worked on.
    pub dtc: Option<String>,
}

impl DiagnosticContext {
    pub fn for_dtc(dtc: impl Into<String>) -> Self {
        Self {
            dtc: Some(dtc.into()),
        }
    }
}

/// One persisted classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub classification_id: Uuid,
    pub component: String,
    pub anomaly: bool,
    pub method: ClassificationMethod,
    pub stage: DiagnosisStage,
    pub score: Option<f64>,
    pub dtc: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ClassificationRecord {
    pub fn new(
        component: impl Into<String>,
        verdict: &Verdict,
        stage: DiagnosisStage,
        context: &DiagnosticContext,
    ) -> Self {
        Self {
            classification_id: Uuid::new_v4(),
            component: component.into(),
            anomaly: verdict.anomaly,
            method: verdict.method,
            stage,
            score: verdict.score,
            dtc: context.dtc.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered mapping component -> anomaly flag, in the order components were classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassifiedComponents {
    entries: Vec<(String, bool)>,
}

impl ClassifiedComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Overwriting keeps the original position.
    pub fn insert(&mut self, component: impl Into<String>, anomaly: bool) {
        let component = component.into();
        match self.entries.iter_mut().find(|(c, _)| *c == component) {
            Some(entry) => entry.1 = anomaly,
            None => self.entries.push((component, anomaly)),
        }
    }

    pub fn get(&self, component: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(c, _)| c == component)
            .map(|(_, a)| *a)
    }

    pub fn contains(&self, component: &str) -> bool {
        self.get(component).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(c, a)| (c.as_str(), *a))
    }

    /// Components flagged anomalous, in insertion order.
    pub fn anomalous(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, a)| *a).map(|(c, _)| c)
    }

    pub fn has_anomaly(&self) -> bool {
        self.entries.iter().any(|(_, a)| *a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for ClassifiedComponents {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (c, a) in iter {
            out.insert(c, a);
        }
        out
    }
}

/// Explanation data for an automated verdict, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationArtifact {
    pub component: String,
    pub anomaly: bool,
    pub method: ClassificationMethod,
    pub score: Option<f64>,
    /// The model input after normalization, one vector per channel.
    pub normalized_input: Vec<Vec<f64>>,
}
