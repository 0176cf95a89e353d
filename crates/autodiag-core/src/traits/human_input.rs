use crate::errors::DiagResult;

/// Operator in the loop.
pub trait IHumanInput: Send + Sync {
    /// Blocks until the operator judges `component`. `true` = anomaly.
    fn manual_verdict(&self, component: &str) -> DiagResult<bool>;
}
