//! Cycle detection using Tarjan's SCC.
//!
//! Structural data is expected to be acyclic, but isolation tolerates cycles. The engine
//! warns about them and `autodiag graph --deny-cycles` rejects them.

use petgraph::algo::tarjan_scc;

use autodiag_core::errors::GraphError;

use super::indexed::IndexedGraph;

/// Every strongly connected component forming a cycle, as component names.
/// Includes single components that affect themselves.
pub fn find_cycles<E>(graph: &IndexedGraph<E>) -> Vec<Vec<String>> {
    tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| {
            scc.len() > 1 || scc.first().is_some_and(|&n| graph.graph.contains_edge(n, n))
        })
        .map(|scc| {
            let mut names: Vec<String> = scc
                .into_iter()
                .filter_map(|n| graph.name(n).map(str::to_string))
                .collect();
            names.sort();
            names
        })
        .collect()
}

/// `Err(CycleDetected)` naming the first cycle found.
pub fn ensure_acyclic<E>(graph: &IndexedGraph<E>) -> Result<(), GraphError> {
    match find_cycles(graph).into_iter().next() {
        Some(cycle) => Err(GraphError::CycleDetected {
            path: cycle.join(" -> "),
        }),
        None => Ok(()),
    }
}
