//! Per-run verdict memo.

use std::collections::HashMap;

use autodiag_core::models::{ClassifiedComponents, Verdict};
use serde::Serialize;

/// Component -> verdict, in insertion order. A verdict, once cached, is never replaced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerdictCache {
    order: Vec<String>,
    verdicts: HashMap<String, Verdict>,
}

impl VerdictCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-populated with the upstream classification.
    pub fn seeded(classified: &ClassifiedComponents) -> Self {
        let mut cache = Self::new();
        for (component, anomaly) in classified.iter() {
            cache.insert(component, Verdict::prior(anomaly));
        }
        cache
    }

    /// Returns `false` and keeps the existing verdict if `component` is already cached.
    pub fn insert(&mut self, component: &str, verdict: Verdict) -> bool {
        if self.verdicts.contains_key(component) {
            return false;
        }
        self.order.push(component.to_string());
        self.verdicts.insert(component.to_string(), verdict);
        true
    }

    pub fn get(&self, component: &str) -> Option<&Verdict> {
        self.verdicts.get(component)
    }

    pub fn contains(&self, component: &str) -> bool {
        self.verdicts.contains_key(component)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Verdict)> {
        self.order
            .iter()
            .filter_map(move |c| self.verdicts.get(c).map(|v| (c.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Anomaly flags only, insertion order preserved.
    pub fn to_classified(&self) -> ClassifiedComponents {
        self.iter().map(|(c, v)| (c, v.anomaly)).collect()
    }
}
