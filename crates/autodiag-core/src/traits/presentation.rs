use crate::errors::DiagResult;
use crate::models::{CausalGraphView, ClassificationArtifact, GraphPhase};

/// Output side of a diagnosis. Callers log failures and carry on.
pub trait IPresentation: Send + Sync {
    /// Fault paths, root cause first.
    fn show_fault_paths(&self, paths: &[String]) -> DiagResult<()>;

    fn show_causal_graph(&self, view: &CausalGraphView, phase: GraphPhase) -> DiagResult<()>;

    /// Explanation for an automated verdict (e.g. a heatmap over the input).
    fn show_classification_artifact(&self, artifact: &ClassificationArtifact) -> DiagResult<()>;
}
