//! IsolationEngine: owns the collaborators, coordinates graph building, isolation and reporting.

use autodiag_classification::ClassificationOracle;
use autodiag_core::config::IsolationConfig;
use autodiag_core::errors::{DiagError, DiagResult, GraphError};
use autodiag_core::models::{CausalGraphView, ClassifiedComponents, DiagnosticContext, GraphPhase};
use autodiag_core::traits::{IPresentation, IStructuralGraph};
use autodiag_observability::tracing_setup::events;
use serde::Serialize;
use tracing::{info, warn};

use crate::graph::cycles::find_cycles;
use crate::graph::{CausalGraphBuilder, CompleteGraph};
use crate::isolation::{FaultIsolator, IsolationReport};
use crate::report::{self, labelled_view, preview_view};

/// What a full isolation stage hands back to the session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnosisOutcome {
    /// One rendered path per anomalous seed, root cause first.
    pub fault_paths: Vec<String>,
    /// Every rendered symptom-to-root chain.
    pub fault_chains: Vec<String>,
    /// Labelled graph per seed, in seed order.
    pub graphs: Vec<CausalGraphView>,
    pub report: IsolationReport,
}

impl DiagnosisOutcome {
    pub fn has_fault_paths(&self) -> bool {
        !self.fault_paths.is_empty()
    }
}

/// The fault isolation stage.
pub struct IsolationEngine<'a> {
    graph: &'a dyn IStructuralGraph,
    oracle: ClassificationOracle<'a>,
    presentation: &'a dyn IPresentation,
    config: IsolationConfig,
}

impl<'a> IsolationEngine<'a> {
    pub fn new(
        graph: &'a dyn IStructuralGraph,
        oracle: ClassificationOracle<'a>,
        presentation: &'a dyn IPresentation,
    ) -> Self {
        Self {
            graph,
            oracle,
            presentation,
            config: IsolationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: IsolationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn oracle(&self) -> &ClassificationOracle<'a> {
        &self.oracle
    }

    /// Build the complete graphs, isolate, present and render.
    ///
    /// # Errors
    /// Structural provider failures and operator input failures. Exceeding the component
    /// limit only drops the graph views. Presentation failures are logged and never returned.
    pub fn run(
        &self,
        classified: &ClassifiedComponents,
        context: &DiagnosticContext,
    ) -> DiagResult<DiagnosisOutcome> {
        let seeds: Vec<&str> = classified.anomalous().collect();
        if seeds.is_empty() {
            info!("no anomalous components, nothing to isolate");
            return Ok(DiagnosisOutcome::default());
        }

        let complete = match CausalGraphBuilder::new(self.graph)
            .with_limit(self.config.effective_max_graph_components())
            .build_per_seed(&seeds)
        {
            Ok(complete) => complete,
            Err(DiagError::GraphError(GraphError::ExpansionLimitExceeded { limit })) => {
                warn!(limit, "complete graph exceeds the component limit, skipping graph views");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        self.warn_on_cycles(&complete);

        if self.config.effective_show_graph_preview() {
            for (seed, graph) in &complete {
                self.present_graph(&preview_view(seed, graph), GraphPhase::Preview);
            }
        }

        let report = FaultIsolator::new(self.graph, &self.oracle).isolate(classified, context)?;

        let mut graphs = Vec::with_capacity(complete.len());
        for (seed, graph) in &complete {
            if let Some(path) = report.path_for(seed) {
                let view = labelled_view(seed, graph, path, &report.links);
                self.present_graph(&view, GraphPhase::Isolated);
                graphs.push(view);
            }
        }

        let fault_paths = report::render(&report.fault_paths);
        let fault_chains = report::render(&report.chains());
        if let Err(e) = self.presentation.show_fault_paths(&fault_paths) {
            events::presentation_failed("fault_paths", &e.to_string());
        }

        Ok(DiagnosisOutcome {
            fault_paths,
            fault_chains,
            graphs,
            report,
        })
    }

    fn present_graph(&self, view: &CausalGraphView, phase: GraphPhase) {
        if let Err(e) = self.presentation.show_causal_graph(view, phase) {
            events::presentation_failed("causal_graph", &e.to_string());
        }
    }

    fn warn_on_cycles(&self, complete: &[(String, CompleteGraph)]) {
        for (seed, graph) in complete {
            for cycle in find_cycles(&graph.to_indexed()) {
                warn!(seed = %seed, cycle = ?cycle, "structural graph contains a cycle");
            }
        }
    }
}
