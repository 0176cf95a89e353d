//! Fault isolation configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IsolationConfig {
    /// Upper bound on components the graph builder may discover. Default: 10000.
    pub max_graph_components: Option<usize>,
    /// Show the unlabelled causal graph before isolation starts. Default: true.
    pub show_graph_preview: Option<bool>,
}

impl IsolationConfig {
    pub fn effective_max_graph_components(&self) -> usize {
        self.max_graph_components
            .unwrap_or(defaults::DEFAULT_MAX_GRAPH_COMPONENTS)
    }

    pub fn effective_show_graph_preview(&self) -> bool {
        self.show_graph_preview
            .unwrap_or(defaults::DEFAULT_SHOW_GRAPH_PREVIEW)
    }
}
