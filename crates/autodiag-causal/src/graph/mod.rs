//! Causal graph: the per-run complete graph, its builder, and petgraph analysis.

pub mod builder;
pub mod cycles;
pub mod indexed;

use std::collections::HashMap;

use serde::Serialize;

pub use builder::CausalGraphBuilder;
pub use indexed::IndexedGraph;

/// Component -> components that affect it, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompleteGraph {
    order: Vec<String>,
    affecting: HashMap<String, Vec<String>>,
}

impl CompleteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the affecting components of `component`. Returns `false` if already a key.
    pub fn insert(&mut self, component: impl Into<String>, affecting: Vec<String>) -> bool {
        let component = component.into();
        if self.affecting.contains_key(&component) {
            return false;
        }
        self.order.push(component.clone());
        self.affecting.insert(component, affecting);
        true
    }

    pub fn contains(&self, component: &str) -> bool {
        self.affecting.contains_key(component)
    }

    pub fn affecting(&self, component: &str) -> Option<&[String]> {
        self.affecting.get(component).map(Vec::as_slice)
    }

    /// Keys in discovery order.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(affected, affecting)` pairs in discovery order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().flat_map(move |k| {
            self.affecting
                .get(k)
                .into_iter()
                .flatten()
                .map(move |a| (k.as_str(), a.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.affecting.values().map(Vec::len).sum()
    }

    pub fn to_indexed(&self) -> IndexedGraph<()> {
        let mut indexed = IndexedGraph::new();
        for component in self.components() {
            indexed.ensure_node(component);
        }
        for (affected, affecting) in self.edges() {
            indexed.add_edge(affected, affecting, ());
        }
        indexed
    }
}
