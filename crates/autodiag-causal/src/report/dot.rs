//! Graphviz export.

use petgraph::dot::{Config, Dot};
use petgraph::visit::EdgeRef;

use autodiag_core::models::CausalGraphView;

use crate::graph::IndexedGraph;

/// DOT text for a labelled view; fault path edges red, non-anomalous green, others black.
pub fn to_dot(view: &CausalGraphView) -> String {
    let mut indexed = IndexedGraph::new();
    indexed.ensure_node(&view.seed);
    for edge in &view.edges {
        indexed.add_edge(&edge.affected, &edge.affecting, edge.status);
    }
    let dot = Dot::with_attr_getters(
        &indexed.graph,
        &[Config::EdgeNoLabel],
        &|_, edge| format!("color={}", edge.weight().color()),
        &|_, _| String::new(),
    );
    format!("{dot}")
}
