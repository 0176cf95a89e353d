//! Fault isolation search.
//!
//! Starting from each anomalous seed, walk the affecting components breadth-first. Anomalous
//! components extend the seed's fault path and are expanded further; non-anomalous ones prune
//! their branch. Each component is classified at most once per run.

pub mod cache;
pub mod chains;
pub mod links;

use std::collections::{HashSet, VecDeque};

use autodiag_classification::ClassificationOracle;
use autodiag_core::errors::DiagResult;
use autodiag_core::models::{
    ClassificationRecord, ClassifiedComponents, DiagnosisStage, DiagnosticContext, FaultPath,
};
use autodiag_core::traits::IStructuralGraph;
use autodiag_observability::tracing_setup::events;
use serde::Serialize;
use tracing::debug;

pub use cache::VerdictCache;
pub use chains::fault_chains;
pub use links::ExplicitlyConsideredLinks;

/// Everything one isolation run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IsolationReport {
    /// One path per anomalous seed, in seed order.
    pub fault_paths: Vec<FaultPath>,
    pub verdicts: VerdictCache,
    pub links: ExplicitlyConsideredLinks,
    /// Classifications performed during isolation, in the order they happened.
    pub records: Vec<ClassificationRecord>,
    pub oracle_calls: usize,
}

impl IsolationReport {
    pub fn path_for(&self, seed: &str) -> Option<&FaultPath> {
        self.fault_paths.iter().find(|p| p.seed() == Some(seed))
    }

    /// Every symptom-to-root chain of every seed, seed order first.
    pub fn chains(&self) -> Vec<FaultPath> {
        self.fault_paths
            .iter()
            .flat_map(|path| fault_chains(path, &self.links))
            .collect()
    }
}

/// Runs the search for one isolation stage.
pub struct FaultIsolator<'a> {
    graph: &'a dyn IStructuralGraph,
    oracle: &'a ClassificationOracle<'a>,
}

/// Mutable state shared by all seeds of one run.
struct RunState {
    verdicts: VerdictCache,
    links: ExplicitlyConsideredLinks,
    records: Vec<ClassificationRecord>,
    oracle_calls: usize,
}

impl<'a> FaultIsolator<'a> {
    pub fn new(graph: &'a dyn IStructuralGraph, oracle: &'a ClassificationOracle<'a>) -> Self {
        Self { graph, oracle }
    }

    /// Isolate a fault path for every anomalous component of `classified`.
    ///
    /// `classified` seeds the verdict cache, so upstream verdicts are never asked for again.
    ///
    /// # Errors
    /// Structural provider failures and operator input failures abort the whole run.
    pub fn isolate(
        &self,
        classified: &ClassifiedComponents,
        context: &DiagnosticContext,
    ) -> DiagResult<IsolationReport> {
        let mut state = RunState {
            verdicts: VerdictCache::seeded(classified),
            links: ExplicitlyConsideredLinks::new(),
            records: Vec::new(),
            oracle_calls: 0,
        };

        let mut fault_paths = Vec::new();
        for seed in classified.anomalous() {
            let path = self.isolate_seed(seed, context, &mut state)?;
            if let Some(root) = path.root_cause() {
                events::fault_path_isolated(seed, root, path.len());
            }
            fault_paths.push(path);
        }

        Ok(IsolationReport {
            fault_paths,
            verdicts: state.verdicts,
            links: state.links,
            records: state.records,
            oracle_calls: state.oracle_calls,
        })
    }

    fn isolate_seed(
        &self,
        seed: &str,
        context: &DiagnosticContext,
        state: &mut RunState,
    ) -> DiagResult<FaultPath> {
        let mut path = FaultPath::new(seed);
        let mut frontier = VecDeque::new();
        let mut queued = HashSet::new();
        self.expand(seed, &path, &mut frontier, &mut queued, state)?;

        while let Some(component) = frontier.pop_front() {
            queued.remove(&component);
            if path.contains(&component) {
                continue;
            }

            let anomaly = match state.verdicts.get(&component) {
                Some(verdict) => {
                    events::verdict_reused(&component, verdict.anomaly);
                    verdict.anomaly
                }
                None => {
                    let strategy = self.oracle.strategy_for(&component)?;
                    let verdict = self.oracle.classify_with(&component, strategy, context)?;
                    state.oracle_calls += 1;
                    events::component_classified(
                        &component,
                        verdict.anomaly,
                        verdict.method,
                        DiagnosisStage::FaultIsolation,
                    );
                    state.records.push(ClassificationRecord::new(
                        component.as_str(),
                        &verdict,
                        DiagnosisStage::FaultIsolation,
                        context,
                    ));
                    state.verdicts.insert(component.as_str(), verdict);
                    verdict.anomaly
                }
            };

            if anomaly {
                path.push(component.as_str());
                self.expand(&component, &path, &mut frontier, &mut queued, state)?;
            } else {
                debug!(seed = %seed, component = %component, "branch pruned");
            }
        }
        Ok(path)
    }

    fn expand(
        &self,
        component: &str,
        path: &FaultPath,
        frontier: &mut VecDeque<String>,
        queued: &mut HashSet<String>,
        state: &mut RunState,
    ) -> DiagResult<()> {
        let affecting = self.graph.affecting_components(component)?;
        for a in &affecting {
            if !path.contains(a) && queued.insert(a.clone()) {
                frontier.push_back(a.clone());
            }
        }
        state.links.record(component, affecting);
        Ok(())
    }
}
