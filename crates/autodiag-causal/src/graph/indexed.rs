//! petgraph::StableGraph wrapper keyed by component name.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

/// Nodes are component names; an edge `affected -> affecting` carries `E`.
#[derive(Debug, Clone)]
pub struct IndexedGraph<E> {
    pub graph: StableGraph<String, E, Directed>,
    /// Map from component name to NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl<E> IndexedGraph<E> {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Get or create the node for `component`.
    pub fn ensure_node(&mut self, component: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(component) {
            return idx;
        }
        let idx = self.graph.add_node(component.to_string());
        self.node_index.insert(component.to_string(), idx);
        idx
    }

    pub fn get_node(&self, component: &str) -> Option<NodeIndex> {
        self.node_index.get(component).copied()
    }

    pub fn add_edge(&mut self, affected: &str, affecting: &str, weight: E) {
        let from = self.ensure_node(affected);
        let to = self.ensure_node(affecting);
        self.graph.add_edge(from, to, weight);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn name(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }
}

impl<E> Default for IndexedGraph<E> {
    fn default() -> Self {
        Self::new()
    }
}
