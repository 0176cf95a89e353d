//! Labelled causal graph data for the presentation layer.

use serde::{Deserialize, Serialize};

/// How an edge of the complete causal graph relates to the isolation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// Consecutive pair on the fault path.
    FaultPath,
    /// Traversed during isolation, not part of the fault path.
    NonAnomalous,
    /// Structurally known, never traversed.
    Disregarded,
}

impl LinkStatus {
    pub fn color(&self) -> &'static str {
        match self {
            Self::FaultPath => "red",
            Self::NonAnomalous => "green",
            Self::Disregarded => "black",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FaultPath => "fault path",
            Self::NonAnomalous => "non-anomalous link",
            Self::Disregarded => "disregarded",
        }
    }
}

/// Edge `affected -> affecting`: `affecting` may cause `affected` to read anomalous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdgeView {
    pub affected: String,
    pub affecting: String,
    pub status: LinkStatus,
}

/// All edges of one seed's complete graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalGraphView {
    pub seed: String,
    pub edges: Vec<GraphEdgeView>,
}

impl CausalGraphView {
    pub fn edges_with(&self, status: LinkStatus) -> impl Iterator<Item = &GraphEdgeView> {
        self.edges.iter().filter(move |e| e.status == status)
    }

    pub fn status_of(&self, affected: &str, affecting: &str) -> Option<LinkStatus> {
        self.edges
            .iter()
            .find(|e| e.affected == affected && e.affecting == affecting)
            .map(|e| e.status)
    }
}

/// When a graph is handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphPhase {
    /// Before isolation; every edge is still `Disregarded`.
    Preview,
    /// After isolation, edges labelled by outcome.
    Isolated,
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
