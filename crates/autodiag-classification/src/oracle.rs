//! The classification oracle: one verdict per component, automated where possible.

use autodiag_core::errors::{DiagErrorCode, DiagResult};
use autodiag_core::models::{DiagnosticContext, Verdict};
use autodiag_core::traits::{IHumanInput, IPresentation, IStructuralGraph};
use autodiag_observability::tracing_setup::events;
use tracing::debug;

use crate::automated::AutomatedClassifier;

/// How a component is going to be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationStrategy {
    /// Record a signal and classify it with a rule-based or trained model.
    Automated,
    /// Ask the operator.
    Manual,
}

impl ClassificationStrategy {
    pub fn from_capability(supports_automated: bool) -> Self {
        if supports_automated {
            Self::Automated
        } else {
            Self::Manual
        }
    }
}

/// Classifies components for the diagnosis stages.
///
/// Does not memoize; callers consult their verdict cache first.
pub struct ClassificationOracle<'a> {
    graph: &'a dyn IStructuralGraph,
    automated: AutomatedClassifier<'a>,
    human: &'a dyn IHumanInput,
    presentation: Option<&'a dyn IPresentation>,
}

impl<'a> ClassificationOracle<'a> {
    pub fn new(
        graph: &'a dyn IStructuralGraph,
        automated: AutomatedClassifier<'a>,
        human: &'a dyn IHumanInput,
    ) -> Self {
        Self {
            graph,
            automated,
            human,
            presentation: None,
        }
    }

    /// Hand classification artifacts to `presentation` after automated verdicts.
    pub fn with_presentation(mut self, presentation: &'a dyn IPresentation) -> Self {
        self.presentation = Some(presentation);
        self
    }

    /// Capability query against the structural graph.
    ///
    /// # Errors
    /// Propagates structural provider failures.
    pub fn strategy_for(&self, component: &str) -> DiagResult<ClassificationStrategy> {
        Ok(ClassificationStrategy::from_capability(
            self.graph.supports_automated_classification(component)?,
        ))
    }

    /// Pick a strategy for `component` and classify it.
    pub fn classify(&self, component: &str, context: &DiagnosticContext) -> DiagResult<Verdict> {
        let strategy = self.strategy_for(component)?;
        self.classify_with(component, strategy, context)
    }

    /// Classify with a known strategy.
    ///
    /// Automated failures degrade to a manual verdict and are never returned.
    ///
    /// # Errors
    /// Only operator input failures.
    pub fn classify_with(
        &self,
        component: &str,
        strategy: ClassificationStrategy,
        context: &DiagnosticContext,
    ) -> DiagResult<Verdict> {
        if strategy == ClassificationStrategy::Automated {
            match self.automated.classify(component) {
                Ok(result) => {
                    debug!(component = %component, dtc = ?context.dtc, "automated verdict");
                    if let Some(presentation) = self.presentation {
                        if let Err(e) = presentation.show_classification_artifact(&result.artifact) {
                            events::presentation_failed("classification_artifact", &e.to_string());
                        }
                    }
                    return Ok(result.verdict);
                }
                Err(e) => {
                    events::classification_fallback(component, e.error_code(), &e.to_string());
                }
            }
        }
        let anomaly = self.human.manual_verdict(component)?;
        Ok(Verdict::manual(anomaly))
    }
}
