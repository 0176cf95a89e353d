//! Iterative expansion of the structural graph around seed components.

use std::collections::{HashSet, VecDeque};

use autodiag_core::errors::{DiagResult, GraphError};
use autodiag_core::traits::IStructuralGraph;
use autodiag_observability::tracing_setup::events;
use tracing::debug;

use super::CompleteGraph;

/// Builds the complete causal graph reachable from a set of seeds.
pub struct CausalGraphBuilder<'a> {
    graph: &'a dyn IStructuralGraph,
    max_components: Option<usize>,
}

impl<'a> CausalGraphBuilder<'a> {
    pub fn new(graph: &'a dyn IStructuralGraph) -> Self {
        Self {
            graph,
            max_components: None,
        }
    }

    /// Fail with `ExpansionLimitExceeded` once more than `limit` components are discovered.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.max_components = Some(limit);
        self
    }

    /// Work queue seeded with `seeds`; each popped component not yet a key is queried and
    /// its affecting components are queued. Components already keys are never queued again.
    pub fn build<S: AsRef<str>>(&self, seeds: &[S]) -> DiagResult<CompleteGraph> {
        let mut complete = CompleteGraph::new();
        let mut queue: VecDeque<String> = seeds.iter().map(|s| s.as_ref().to_string()).collect();
        let mut queued: HashSet<String> = queue.iter().cloned().collect();

        while let Some(component) = queue.pop_front() {
            queued.remove(&component);
            if complete.contains(&component) {
                continue;
            }
            if let Some(limit) = self.max_components {
                if complete.len() >= limit {
                    return Err(GraphError::ExpansionLimitExceeded { limit }.into());
                }
            }
            let affecting = self.graph.affecting_components(&component)?;
            for a in &affecting {
                if !complete.contains(a) && a != &component && queued.insert(a.clone()) {
                    queue.push_back(a.clone());
                }
            }
            debug!(component = %component, affecting = affecting.len(), "expanded component");
            complete.insert(component, affecting);
        }

        events::graph_expanded(seeds.len(), complete.len(), complete.edge_count());
        Ok(complete)
    }

    /// One complete graph per seed, in seed order.
    pub fn build_per_seed<S: AsRef<str>>(&self, seeds: &[S]) -> DiagResult<Vec<(String, CompleteGraph)>> {
        seeds
            .iter()
            .map(|s| {
                let seed = s.as_ref();
                Ok((seed.to_string(), self.build(&[seed])?))
            })
            .collect()
    }
}
