//! Automated classification of a recorded signal.

use autodiag_core::config::ClassificationConfig;
use autodiag_core::errors::ClassificationError;
use autodiag_core::models::{
    ClassificationArtifact, ClassificationMethod, TimeSeries, Verdict,
};
use autodiag_core::traits::{IModelAccessor, ISignalAccessor};
use tracing::debug;

use crate::preprocess::normalize;
use crate::rule_based::RuleBasedRegistry;
use crate::validation::validate_model_shapes;
use crate::verdict::derive_verdict;

/// Tunables for deriving verdicts from model output.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierSettings {
    pub single_score_threshold: f64,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            single_score_threshold: autodiag_core::constants::DEFAULT_SINGLE_SCORE_THRESHOLD,
        }
    }
}

impl From<&ClassificationConfig> for ClassifierSettings {
    fn from(config: &ClassificationConfig) -> Self {
        Self {
            single_score_threshold: config.effective_single_score_threshold(),
        }
    }
}

/// Verdict plus the explanation data behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct AutomatedClassification {
    pub verdict: Verdict,
    pub artifact: ClassificationArtifact,
}

/// Signal-based classification: rule-based models first, then the trained model pool.
pub struct AutomatedClassifier<'a> {
    signals: &'a dyn ISignalAccessor,
    models: &'a dyn IModelAccessor,
    rules: RuleBasedRegistry,
    settings: ClassifierSettings,
}

impl<'a> AutomatedClassifier<'a> {
    pub fn new(signals: &'a dyn ISignalAccessor, models: &'a dyn IModelAccessor) -> Self {
        Self {
            signals,
            models,
            rules: RuleBasedRegistry::new(),
            settings: ClassifierSettings::default(),
        }
    }

    pub fn with_rules(mut self, rules: RuleBasedRegistry) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_settings(mut self, settings: ClassifierSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Record and classify `component`. Anomalous if any channel is.
    pub fn classify(&self, component: &str) -> Result<AutomatedClassification, ClassificationError> {
        let recording = self.signals.get_recording(component)?;
        recording.validate()?;

        if let Some(rule) = self.rules.get(component) {
            debug!(component = %component, channels = recording.channels.len(), "applying rule-based model");
            let anomaly = recording
                .channels
                .iter()
                .any(|c| rule.predict(&c.samples, c.name.as_deref()));
            return Ok(self.finish(
                component,
                Verdict::new(anomaly, ClassificationMethod::RuleBased),
                raw_input(&recording),
            ));
        }

        let model = self
            .models
            .get_model(component)
            .ok_or_else(|| ClassificationError::ModelUnavailable {
                component: component.to_string(),
            })?;

        let method = model.metadata.normalization_method;

        let mut anomaly = false;
        let mut reported_score: Option<f64> = None;
        let mut normalized_input = Vec::with_capacity(recording.channels.len());
        for channel in &recording.channels {
            validate_model_shapes(component, &model, channel.len())?;
            let input = normalize(&channel.samples, method);
            let scores = model.model.predict(&input)?;
            let scored = derive_verdict(
                &scores,
                self.settings.single_score_threshold,
                model.metadata.anomaly_class_index,
            )?;
            debug!(
                component = %component,
                channel = ?channel.name,
                anomaly = scored.anomaly,
                score = scored.score,
                "channel classified"
            );
            // first anomalous channel's score wins, else the first channel's
            if scored.anomaly && !anomaly {
                reported_score = Some(scored.score);
            } else if reported_score.is_none() {
                reported_score = Some(scored.score);
            }
            anomaly |= scored.anomaly;
            normalized_input.push(input);
        }

        let mut verdict = Verdict::new(anomaly, ClassificationMethod::Model);
        verdict.score = reported_score;
        Ok(self.finish(component, verdict, normalized_input))
    }

    fn finish(
        &self,
        component: &str,
        verdict: Verdict,
        normalized_input: Vec<Vec<f64>>,
    ) -> AutomatedClassification {
        AutomatedClassification {
            artifact: ClassificationArtifact {
                component: component.to_string(),
                anomaly: verdict.anomaly,
                method: verdict.method,
                score: verdict.score,
                normalized_input,
            },
            verdict,
        }
    }
}

fn raw_input(recording: &TimeSeries) -> Vec<Vec<f64>> {
    recording.channels.iter().map(|c| c.samples.clone()).collect()
}
