//! Session stages end to end against scripted collaborators.

use std::collections::BTreeMap;

use autodiag_causal::IsolationEngine;
use autodiag_classification::{AutomatedClassifier, ClassificationOracle};
use autodiag_core::errors::{DiagError, SessionError};
use autodiag_core::models::{
    ClassificationMethod, DiagnosisStage, DiagnosticContext, OnboardDiagnosisData, SuspectComponent,
};
use autodiag_session::{
    classify_suspects, suggest_suspect_components, ClassificationLog, ClassificationOutcome,
    SessionOutcome, SessionRunner,
};
use test_fixtures::{
    load_scenario, RecordingPresentation, ScenarioWorld, ScriptedGraph, ScriptedHumanInput,
    ScriptedKnowledge, ScriptedModels, ScriptedSignals,
};

fn obd(dtcs: &[&str]) -> OnboardDiagnosisData {
    OnboardDiagnosisData {
        dtc_list: dtcs.iter().map(|s| s.to_string()).collect(),
        vin: Some("WVWZZZ1JZXW000001".into()),
        ..Default::default()
    }
}

fn knowledge(entries: &[(&str, Vec<SuspectComponent>)]) -> ScriptedKnowledge {
    ScriptedKnowledge::new(
        entries
            .iter()
            .map(|(dtc, s)| (dtc.to_string(), s.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}

// =============================================================================
// Suggestion
// =============================================================================

#[test]
fn suspects_ordered_by_priority_then_name_and_split() {
    let kb = knowledge(&[(
        "P0101",
        vec![
            SuspectComponent::new("Zeta", 1),
            SuspectComponent::new("Alpha", 1),
            SuspectComponent::new("Mid", 0),
            SuspectComponent::new("Mid", 3),
        ],
    )]);
    let graph = ScriptedGraph::default().with_automated(["Alpha"]);
    let suggestion = suggest_suspect_components(&kb, &graph, "P0101").unwrap();

    let names: Vec<&str> = suggestion.ordered().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Mid", "Alpha", "Zeta"]);
    assert_eq!(suggestion.automated.len(), 1);
    assert_eq!(suggestion.automated[0].name, "Alpha");
    assert_eq!(suggestion.manual.len(), 2);
}

#[test]
fn unknown_dtc_has_no_suspects() {
    let kb = knowledge(&[]);
    let err = suggest_suspect_components(&kb, &ScriptedGraph::default(), "P9999").unwrap_err();
    assert!(matches!(
        err,
        DiagError::SessionError(SessionError::NoSuspectComponents { .. })
    ));
}

// =============================================================================
// Component classification stage
// =============================================================================

#[test]
fn classification_stage_reports_anomalies() {
    let kb = knowledge(&[(
        "P0101",
        vec![SuspectComponent::new("A", 0), SuspectComponent::new("B", 1)],
    )]);
    let graph = ScriptedGraph::default().with_automated(["A"]);
    let signals = ScriptedSignals::flat(["A"], 8);
    let models = ScriptedModels::new().with_single_score("A", 8, false);
    let human = ScriptedHumanInput::from_pairs(&[("B", true)]);
    let oracle = ClassificationOracle::new(&graph, AutomatedClassifier::new(&signals, &models), &human);

    let suggestion = suggest_suspect_components(&kb, &graph, "P0101").unwrap();
    let stage = classify_suspects(&oracle, &suggestion, &DiagnosticContext::for_dtc("P0101")).unwrap();

    assert_eq!(stage.outcome, ClassificationOutcome::DetectedAnomalies);
    assert_eq!(stage.classified.get("A"), Some(false));
    assert_eq!(stage.classified.get("B"), Some(true));
    assert_eq!(stage.records.len(), 2);
    assert!(stage
        .records
        .iter()
        .all(|r| r.stage == DiagnosisStage::ComponentClassification));
    assert_eq!(stage.records[0].method, ClassificationMethod::Model);
    assert_eq!(stage.records[1].method, ClassificationMethod::Manual);
}

#[test]
fn classification_stage_without_anomaly() {
    let kb = knowledge(&[("P0101", vec![SuspectComponent::new("A", 0)])]);
    let graph = ScriptedGraph::default();
    let signals = ScriptedSignals::new();
    let models = ScriptedModels::new();
    let human = ScriptedHumanInput::from_pairs(&[("A", false)]);
    let oracle = ClassificationOracle::new(&graph, AutomatedClassifier::new(&signals, &models), &human);

    let suggestion = suggest_suspect_components(&kb, &graph, "P0101").unwrap();
    let stage = classify_suspects(&oracle, &suggestion, &DiagnosticContext::default()).unwrap();
    assert_eq!(stage.outcome, ClassificationOutcome::NoAnomaly);
}

// =============================================================================
// Full session
// =============================================================================

#[test]
fn scenario_zero_session_reaches_diagnosis() {
    let scenario = load_scenario("scenario_zero");
    let world = ScenarioWorld::new(&scenario);
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("classifications.json");

    let report = {
        let oracle = ClassificationOracle::new(
            &world.graph,
            AutomatedClassifier::new(&world.signals, &world.models),
            &world.human,
        );
        let engine = IsolationEngine::new(&world.graph, oracle, &world.presentation);
        SessionRunner::new(&world.knowledge, &world.graph, engine)
            .with_log(ClassificationLog::new(&log_path))
            .run(obd(&["P0125"]))
            .unwrap()
    };

    match &report.outcome {
        SessionOutcome::Diagnosis { dtc, outcome } => {
            assert_eq!(dtc, "P0125");
            assert_eq!(outcome.fault_paths, scenario.expected_rendered);
        }
        SessionOutcome::NoProblemDetected => panic!("expected a diagnosis"),
    }
    assert_eq!(report.session.fault_paths, scenario.expected_rendered);
    assert_eq!(report.session.selected_dtc.as_deref(), Some("P0125"));

    let records = ClassificationLog::new(&log_path).load_all().unwrap();
    assert_eq!(records.len(), 1 + scenario.expected_oracle_calls);
    assert_eq!(records[0].stage, DiagnosisStage::ComponentClassification);
    assert!(records[1..].iter().all(|r| r.stage == DiagnosisStage::FaultIsolation));
    assert!(records.iter().all(|r| r.dtc.as_deref() == Some("P0125")));
}

#[test]
fn session_stops_at_first_code_with_anomaly() {
    let scenario = load_scenario("scenario_two");
    let world = ScenarioWorld::new(&scenario);
    let oracle = ClassificationOracle::new(
        &world.graph,
        AutomatedClassifier::new(&world.signals, &world.models),
        &world.human,
    );
    let engine = IsolationEngine::new(&world.graph, oracle, &world.presentation);
    let report = SessionRunner::new(&world.knowledge, &world.graph, engine)
        .run(obd(&["P0127", "P0128", "P0127"]))
        .unwrap();

    match report.outcome {
        SessionOutcome::Diagnosis { dtc, outcome } => {
            assert_eq!(dtc, "P0127");
            assert_eq!(outcome.fault_paths, vec!["C29 -> C27 -> C25 -> C24 -> C22".to_string()]);
        }
        SessionOutcome::NoProblemDetected => panic!("expected a diagnosis"),
    }
    assert_eq!(report.session.remaining_dtcs, vec!["P0128".to_string()]);
}

#[test]
fn session_without_anomaly_detects_no_problem() {
    let kb = knowledge(&[
        ("P0101", vec![SuspectComponent::new("A", 0)]),
        ("P0102", vec![SuspectComponent::new("B", 0)]),
    ]);
    let graph = ScriptedGraph::default();
    let signals = ScriptedSignals::new();
    let models = ScriptedModels::new();
    let human = ScriptedHumanInput::from_pairs(&[("A", false), ("B", false)]);
    let presentation = RecordingPresentation::new();
    let oracle = ClassificationOracle::new(&graph, AutomatedClassifier::new(&signals, &models), &human);
    let engine = IsolationEngine::new(&graph, oracle, &presentation);

    let report = SessionRunner::new(&kb, &graph, engine)
        .run(obd(&["P0101", "P9999", "P0102"]))
        .unwrap();

    assert!(matches!(report.outcome, SessionOutcome::NoProblemDetected));
    assert_eq!(report.session.processed_dtcs, vec!["P0101", "P9999", "P0102"]);
    assert!(presentation.fault_paths().is_empty());
    assert_eq!(human.calls(), vec!["A".to_string(), "B".to_string()]);
}
