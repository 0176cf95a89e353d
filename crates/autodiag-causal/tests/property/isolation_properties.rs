//! Property tests for fault isolation over random structural graphs.

use std::collections::{BTreeMap, HashSet};

use autodiag_causal::graph::cycles::find_cycles;
use autodiag_causal::{CausalGraphBuilder, FaultIsolator};
use autodiag_classification::{AutomatedClassifier, ClassificationOracle};
use autodiag_core::models::{ClassifiedComponents, DiagnosticContext};
use proptest::prelude::*;
use test_fixtures::{ScriptedGraph, ScriptedHumanInput, ScriptedModels, ScriptedSignals};

fn name(i: usize) -> String {
    format!("C{i}")
}

/// Edges `(affected, affecting)`; only higher indices affect lower ones, so the graph is a DAG.
fn dag(n: usize, edges: &[(usize, usize)]) -> BTreeMap<String, Vec<String>> {
    let mut graph: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for &(a, b) in edges {
        let (affected, affecting) = if a < b { (a, b) } else { (b, a) };
        if affected == affecting || affecting >= n {
            continue;
        }
        let entry = graph.entry(name(affected)).or_default();
        if !entry.contains(&name(affecting)) {
            entry.push(name(affecting));
        }
    }
    graph
}

/// Arbitrary edges, cycles and self-loops included.
fn any_graph(edges: &[(usize, usize)]) -> BTreeMap<String, Vec<String>> {
    let mut graph: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for &(a, b) in edges {
        let entry = graph.entry(name(a)).or_default();
        if !entry.contains(&name(b)) {
            entry.push(name(b));
        }
    }
    graph
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 2)
}

fn verdicts(n: usize, flags: &[bool]) -> BTreeMap<String, bool> {
    (0..n).map(|i| (name(i), flags[i])).collect()
}

struct Run {
    graph: BTreeMap<String, Vec<String>>,
    verdicts: BTreeMap<String, bool>,
    report: autodiag_causal::IsolationReport,
    human: ScriptedHumanInput,
}

fn isolate(graph: BTreeMap<String, Vec<String>>, verdicts: BTreeMap<String, bool>, seeds: &[usize]) -> Run {
    let scripted = ScriptedGraph::new(graph.clone());
    let human = ScriptedHumanInput::new(verdicts.clone());
    let signals = ScriptedSignals::new();
    let models = ScriptedModels::new();
    let report = {
        let oracle = ClassificationOracle::new(
            &scripted,
            AutomatedClassifier::new(&signals, &models),
            &human,
        );
        let classified: ClassifiedComponents = seeds.iter().map(|&s| (name(s), true)).collect();
        FaultIsolator::new(&scripted, &oracle)
            .isolate(&classified, &DiagnosticContext::default())
            .expect("isolation over scripted graph")
    };
    Run { graph, verdicts, report, human }
}

fn affecting<'g>(graph: &'g BTreeMap<String, Vec<String>>, c: &str) -> &'g [String] {
    graph.get(c).map(Vec::as_slice).unwrap_or(&[])
}

// =============================================================================
// Properties over DAGs
// =============================================================================

proptest! {
    #[test]
    fn one_path_per_seed_starting_at_seed(
        edges in edge_strategy(12),
        flags in prop::collection::vec(any::<bool>(), 12),
    ) {
        let run = isolate(dag(12, &edges), verdicts(12, &flags), &[0, 3]);
        prop_assert_eq!(run.report.fault_paths.len(), 2);
        prop_assert_eq!(run.report.fault_paths[0].seed(), Some("C0"));
        prop_assert_eq!(run.report.fault_paths[1].seed(), Some("C3"));
    }

    #[test]
    fn every_component_classified_at_most_once(
        edges in edge_strategy(12),
        flags in prop::collection::vec(any::<bool>(), 12),
    ) {
        let run = isolate(dag(12, &edges), verdicts(12, &flags), &[0, 1, 2]);
        let calls = run.human.calls();
        let distinct: HashSet<&String> = calls.iter().collect();
        prop_assert_eq!(calls.len(), distinct.len());
        prop_assert_eq!(run.report.oracle_calls, calls.len());
        prop_assert_eq!(run.report.records.len(), calls.len());
        prop_assert!(!calls.iter().any(|c| c == "C0" || c == "C1" || c == "C2"));
    }

    #[test]
    fn non_seed_path_members_are_anomalous(
        edges in edge_strategy(12),
        flags in prop::collection::vec(any::<bool>(), 12),
    ) {
        let run = isolate(dag(12, &edges), verdicts(12, &flags), &[0]);
        for c in run.report.fault_paths[0].components().iter().skip(1) {
            prop_assert_eq!(run.verdicts.get(c).copied(), Some(true));
        }
    }

    #[test]
    fn path_members_are_reachable_from_earlier_members(
        edges in edge_strategy(12),
        flags in prop::collection::vec(any::<bool>(), 12),
    ) {
        let run = isolate(dag(12, &edges), verdicts(12, &flags), &[0]);
        let path = run.report.fault_paths[0].components();
        for (i, c) in path.iter().enumerate().skip(1) {
            let caused = path[..i].iter().any(|p| affecting(&run.graph, p).contains(c));
            prop_assert!(caused, "{} has no affected predecessor on the path", c);
        }
    }

    #[test]
    fn search_stops_only_at_non_anomalous_causes(
        edges in edge_strategy(12),
        flags in prop::collection::vec(any::<bool>(), 12),
    ) {
        let run = isolate(dag(12, &edges), verdicts(12, &flags), &[0]);
        let path = &run.report.fault_paths[0];
        for c in path.components() {
            for a in affecting(&run.graph, c) {
                let anomalous = run.report.verdicts.get(a).map(|v| v.anomaly);
                prop_assert!(
                    path.contains(a) || anomalous == Some(false),
                    "{} -> {} left unexplored", c, a
                );
            }
        }
    }

    #[test]
    fn single_anomalous_cause_gives_edge_connected_path(
        edges in edge_strategy(10),
        flags in prop::collection::vec(any::<bool>(), 10),
    ) {
        let graph = dag(10, &edges);
        let verdicts = verdicts(10, &flags);
        let branching = graph.values().any(|aff| {
            aff.iter().filter(|a| verdicts.get(*a).copied().unwrap_or(false)).count() > 1
        });
        let run = isolate(graph, verdicts, &[0]);
        if !branching {
            let path = run.report.fault_paths[0].components();
            for pair in path.windows(2) {
                prop_assert!(affecting(&run.graph, &pair[0]).contains(&pair[1]));
            }
            let root = &path[path.len() - 1];
            prop_assert!(affecting(&run.graph, root)
                .iter()
                .all(|a| run.verdicts.get(a).copied() == Some(false)));
        }
    }

    #[test]
    fn chains_follow_real_edges_and_end_at_roots(
        edges in edge_strategy(10),
        flags in prop::collection::vec(any::<bool>(), 10),
    ) {
        let run = isolate(dag(10, &edges), verdicts(10, &flags), &[0]);
        let path = &run.report.fault_paths[0];
        let chains = run.report.chains();
        prop_assert!(!chains.is_empty());
        for chain in &chains {
            let members = chain.components();
            prop_assert_eq!(chain.seed(), Some("C0"));
            for pair in members.windows(2) {
                prop_assert!(affecting(&run.graph, &pair[0]).contains(&pair[1]));
            }
            let root = &members[members.len() - 1];
            prop_assert!(affecting(&run.graph, root).iter().all(|a| !path.contains(a)));
        }
    }
}

// =============================================================================
// Properties over arbitrary (possibly cyclic) graphs
// =============================================================================

proptest! {
    #[test]
    fn isolation_terminates_on_cycles(
        edges in edge_strategy(8),
        flags in prop::collection::vec(any::<bool>(), 8),
    ) {
        let run = isolate(any_graph(&edges), verdicts(8, &flags), &[0]);
        let path = run.report.fault_paths[0].components();
        let distinct: HashSet<&String> = path.iter().collect();
        prop_assert_eq!(distinct.len(), path.len());
        prop_assert!(run.report.oracle_calls <= 7);
    }

    #[test]
    fn builder_terminates_and_covers_reachable(edges in edge_strategy(8)) {
        let graph = any_graph(&edges);
        let scripted = ScriptedGraph::new(graph.clone());
        let complete = CausalGraphBuilder::new(&scripted).build(&["C0"]).unwrap();
        prop_assert!(complete.contains("C0"));
        for (affected, affecting) in complete.edges() {
            prop_assert!(complete.contains(affected));
            prop_assert!(complete.contains(affecting));
        }
        prop_assert_eq!(scripted.affecting_query_count(), complete.len());
    }

    #[test]
    fn dags_report_no_cycles(edges in edge_strategy(10)) {
        let scripted = ScriptedGraph::new(dag(10, &edges));
        let complete = CausalGraphBuilder::new(&scripted).build(&["C0"]).unwrap();
        prop_assert!(find_cycles(&complete.to_indexed()).is_empty());
    }
}
