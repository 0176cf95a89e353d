//! Tests for the shared domain models.

use autodiag_core::errors::ClassificationError;
use autodiag_core::models::{
    Channel, ClassificationRecord, ClassifiedComponents, DiagnosisStage, DiagnosticContext,
    FaultPath, ModelMetadata, NormalizationMethod, TensorShape, TimeSeries, Verdict,
};

// =============================================================================
// FaultPath
// =============================================================================

#[test]
fn render_reverses_and_joins() {
    let path = FaultPath::from_components(vec!["C1".into(), "C2".into(), "C3".into()]);
    assert_eq!(path.render(), "C3 -> C2 -> C1");
    assert_eq!(path.seed(), Some("C1"));
    assert_eq!(path.root_cause(), Some("C3"));
}

#[test]
fn single_component_path_renders_alone() {
    assert_eq!(FaultPath::new("C14").render(), "C14");
}

// =============================================================================
// ClassifiedComponents
// =============================================================================

#[test]
fn classified_components_keep_insertion_order() {
    let mut classified = ClassifiedComponents::new();
    classified.insert("B", true);
    classified.insert("A", false);
    classified.insert("C", true);
    classified.insert("B", false);

    let order: Vec<&str> = classified.iter().map(|(c, _)| c).collect();
    assert_eq!(order, vec!["B", "A", "C"]);
    assert_eq!(classified.get("B"), Some(false));
    assert_eq!(classified.anomalous().collect::<Vec<_>>(), vec!["C"]);
}

#[test]
fn classified_components_collect_from_pairs() {
    let classified: ClassifiedComponents = [("C1", true), ("C2", false)].into_iter().collect();
    assert!(classified.has_anomaly());
    assert_eq!(classified.len(), 2);
}

// =============================================================================
// TimeSeries
// =============================================================================

#[test]
fn time_series_validation() {
    assert!(TimeSeries::univariate("C", vec![0.1, 0.2]).validate().is_ok());

    let short = TimeSeries::univariate("C", vec![0.1]);
    assert!(matches!(
        short.validate(),
        Err(ClassificationError::InvalidSignal { .. })
    ));

    let nan = TimeSeries::univariate("C", vec![0.1, f64::NAN]);
    assert!(nan.validate().is_err());

    let empty = TimeSeries::multivariate("C", vec![]);
    assert!(empty.validate().is_err());

    let multi = TimeSeries::multivariate(
        "C",
        vec![
            Channel::named("Plusleitung", vec![1.0, 2.0]),
            Channel::new(vec![3.0, 4.0, 5.0]),
        ],
    );
    assert!(multi.is_multivariate());
    assert!(multi.validate().is_ok());
}

// =============================================================================
// Model metadata
// =============================================================================

#[test]
fn normalization_serde_names() {
    for method in NormalizationMethod::ALL {
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, format!("\"{}\"", method.as_str()));
        assert_eq!(NormalizationMethod::from_str_name(method.as_str()), Some(method));
    }
    assert_eq!(NormalizationMethod::from_str_name("whatever"), None);
}

#[test]
fn metadata_defaults_apply_when_fields_missing() {
    let meta: ModelMetadata =
        serde_json::from_str(r#"{"model_id": "m1", "input_length": 500}"#).unwrap();
    assert_eq!(meta.normalization_method, NormalizationMethod::None);
    assert_eq!(meta.anomaly_class_index, 0);
}

#[test]
fn tensor_shape_display_and_dims() {
    let shape = TensorShape::new(vec![None, Some(500), Some(1)]);
    assert_eq!(shape.to_string(), "(None, 500, 1)");
    assert_eq!(shape.rank(), 3);
    assert_eq!(shape.dim(0), None);
    assert_eq!(shape.dim(1), Some(500));
    assert_eq!(shape.dim(7), None);
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn classification_record_copies_verdict_and_context() {
    let verdict = Verdict::manual(true);
    let record = ClassificationRecord::new(
        "Saugrohrdrucksensor",
        &verdict,
        DiagnosisStage::FaultIsolation,
        &DiagnosticContext::for_dtc("P0123"),
    );
    assert!(record.anomaly);
    assert_eq!(record.dtc.as_deref(), Some("P0123"));

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"method\":\"manual\""));
    assert!(json.contains("\"stage\":\"fault_isolation\""));
}
