//! Links examined during isolation.

use std::collections::HashMap;

use serde::Serialize;

/// Anomalous component -> the affecting components that were queued because of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExplicitlyConsideredLinks {
    order: Vec<String>,
    links: HashMap<String, Vec<String>>,
}

impl ExplicitlyConsideredLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the affecting components of `component`, merging with earlier entries.
    pub fn record(&mut self, component: &str, affecting: Vec<String>) {
        match self.links.get_mut(component) {
            Some(existing) => {
                for a in affecting {
                    if !existing.contains(&a) {
                        existing.push(a);
                    }
                }
            }
            None => {
                self.order.push(component.to_string());
                self.links.insert(component.to_string(), affecting);
            }
        }
    }

    pub fn affecting(&self, component: &str) -> &[String] {
        self.links.get(component).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the link `affected -> affecting` was examined.
    pub fn considered(&self, affected: &str, affecting: &str) -> bool {
        self.affecting(affected).iter().any(|a| a == affecting)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .filter_map(move |c| self.links.get(c).map(|l| (c.as_str(), l.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
