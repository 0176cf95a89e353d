//! Structured log events for key diagnosis operations.
//!
//! Each function emits a `tracing` event with structured fields.

use autodiag_core::models::{ClassificationMethod, DiagnosisStage};

/// A component received a verdict.
pub fn component_classified(
    component: &str,
    anomaly: bool,
    method: ClassificationMethod,
    stage: DiagnosisStage,
) {
    tracing::info!(
        event = "component_classified",
        component = %component,
        anomaly = anomaly,
        method = ?method,
        stage = ?stage,
        "component classified"
    );
}

/// Automated classification failed; the operator is asked instead.
pub fn classification_fallback(component: &str, error_code: &str, reason: &str) {
    tracing::warn!(
        event = "classification_fallback",
        component = %component,
        error_code = %error_code,
        reason = %reason,
        fallback = "manual",
        "automated classification unavailable, falling back to manual inspection"
    );
}

/// A cached verdict was reused instead of classifying again.
pub fn verdict_reused(component: &str, anomaly: bool) {
    tracing::debug!(
        event = "verdict_reused",
        component = %component,
        anomaly = anomaly,
        "reusing cached verdict"
    );
}

/// Isolation finished for one seed.
pub fn fault_path_isolated(seed: &str, root_cause: &str, length: usize) {
    tracing::info!(
        event = "fault_path_isolated",
        seed = %seed,
        root_cause = %root_cause,
        length = length,
        "fault path isolated"
    );
}

/// The graph builder finished expanding from a set of seeds.
pub fn graph_expanded(seeds: usize, components: usize, edges: usize) {
    tracing::debug!(
        event = "graph_expanded",
        seeds = seeds,
        components = components,
        edges = edges,
        "causal graph expanded"
    );
}

/// A presentation call failed. The diagnosis continues.
pub fn presentation_failed(what: &str, reason: &str) {
    tracing::warn!(
        event = "presentation_failed",
        what = %what,
        reason = %reason,
        "presentation failed"
    );
}

/// A trouble code was picked for the next diagnosis round.
pub fn dtc_selected(dtc: &str, remaining: usize) {
    tracing::info!(
        event = "dtc_selected",
        dtc = %dtc,
        remaining = remaining,
        "DTC selected"
    );
}
