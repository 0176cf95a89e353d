//! Labelled edge views of a seed's complete graph.

use autodiag_core::models::{CausalGraphView, FaultPath, GraphEdgeView, LinkStatus};

use crate::graph::CompleteGraph;
use crate::isolation::ExplicitlyConsideredLinks;

/// Before isolation nothing has been traversed: every edge is disregarded.
pub fn preview_view(seed: &str, graph: &CompleteGraph) -> CausalGraphView {
    view(seed, graph, |_, _| LinkStatus::Disregarded)
}

/// Edges between components of `path` that isolation examined are fault path links, other
/// examined edges are non-anomalous links, the rest were disregarded.
pub fn labelled_view(
    seed: &str,
    graph: &CompleteGraph,
    path: &FaultPath,
    links: &ExplicitlyConsideredLinks,
) -> CausalGraphView {
    view(seed, graph, |affected, affecting| {
        if !links.considered(affected, affecting) {
            LinkStatus::Disregarded
        } else if path.contains(affected) && path.contains(affecting) {
            LinkStatus::FaultPath
        } else {
            LinkStatus::NonAnomalous
        }
    })
}

fn view(
    seed: &str,
    graph: &CompleteGraph,
    status: impl Fn(&str, &str) -> LinkStatus,
) -> CausalGraphView {
    CausalGraphView {
        seed: seed.to_string(),
        edges: graph
            .edges()
            .map(|(affected, affecting)| GraphEdgeView {
                affected: affected.to_string(),
                affecting: affecting.to_string(),
                status: status(affected, affecting),
            })
            .collect(),
    }
}
