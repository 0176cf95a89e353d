use crate::errors::DiagResult;
use crate::models::SuspectComponent;

/// Structural "affected-by" knowledge about the vehicle.
///
/// Answers are assumed stable for the duration of a run.
pub trait IStructuralGraph: Send + Sync {
    /// Components whose malfunction can make `component` read anomalous.
    fn affecting_components(&self, component: &str) -> DiagResult<Vec<String>>;

    /// Whether a recorded signal of `component` can be classified automatically.
    fn supports_automated_classification(&self, component: &str) -> DiagResult<bool>;
}

/// Maps trouble codes to the components suspected of causing them.
pub trait ISuspectKnowledge: Send + Sync {
    fn suspect_components(&self, dtc: &str) -> DiagResult<Vec<SuspectComponent>>;
}
