//! Tests for tracing setup and events.

use autodiag_core::config::ObservabilityConfig;
use autodiag_core::models::{ClassificationMethod, DiagnosisStage};
use autodiag_observability::tracing_setup::events;
use autodiag_observability::{init_from_config, init_tracing_with_filter};

#[test]
fn second_install_reports_existing_subscriber() {
    // Either this test installs first or another one did; afterwards every install fails.
    let _ = init_tracing_with_filter("debug");
    assert!(!init_tracing_with_filter("info"));
    assert!(!init_from_config(&ObservabilityConfig::default()));
}

#[test]
fn events_emit_without_panicking() {
    let _ = init_tracing_with_filter("debug");
    events::component_classified(
        "Lambdasonde",
        true,
        ClassificationMethod::Model,
        DiagnosisStage::FaultIsolation,
    );
    events::classification_fallback("Lambdasonde", "MODEL_UNAVAILABLE", "no model");
    events::verdict_reused("Lambdasonde", true);
    events::fault_path_isolated("C1", "C5", 5);
    events::graph_expanded(1, 13, 12);
    events::presentation_failed("fault_paths", "window closed");
    events::dtc_selected("P0123", 2);
}
