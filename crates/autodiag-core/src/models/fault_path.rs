//! Ordered fault path from symptom to root cause.

use serde::{Deserialize, Serialize};

use crate::constants::FAULT_PATH_SEPARATOR;

/// Components from the seed (symptom, first) to the deepest confirmed anomaly (last).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaultPath(Vec<String>);

impl FaultPath {
    pub fn new(seed: impl Into<String>) -> Self {
        Self(vec![seed.into()])
    }

    pub fn from_components(components: Vec<String>) -> Self {
        Self(components)
    }

    pub fn seed(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Deepest confirmed-anomalous component.
    pub fn root_cause(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn push(&mut self, component: impl Into<String>) {
        self.0.push(component.into());
    }

    pub fn contains(&self, component: &str) -> bool {
        self.0.iter().any(|c| c == component)
    }

    pub fn components(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Root cause first, joined with `" -> "`.
    pub fn render(&self) -> String {
        let reversed: Vec<&str> = self.0.iter().rev().map(String::as_str).collect();
        reversed.join(FAULT_PATH_SEPARATOR)
    }
}

impl std::fmt::Display for FaultPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
