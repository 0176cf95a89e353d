//! Tests for the filesystem model pool.

use autodiag_classification::LocalModelPool;
use autodiag_core::config::DiagConfig;
use autodiag_core::models::NormalizationMethod;
use autodiag_core::traits::IModelAccessor;

#[test]
fn missing_model_file_yields_none() {
    let dir = tempfile::TempDir::new().unwrap();
    let pool = LocalModelPool::new(dir.path());
    assert!(pool.get_model("C1").is_none());
}

#[test]
fn paths_follow_component_names() {
    let pool = LocalModelPool::new("/models");
    assert_eq!(pool.model_path("C1").to_str(), Some("/models/C1.onnx"));
    assert_eq!(pool.metadata_path("C1").to_str(), Some("/models/C1.toml"));
}

#[test]
fn metadata_file_overrides_pool_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("C1.toml"),
        r#"
model_id = "c1-fcn-v2"
normalization_method = "z_norm"
input_length = 500
"#,
    )
    .unwrap();

    let pool = LocalModelPool::new(dir.path());
    let meta = pool.load_metadata("C1", Some(250)).unwrap();
    assert_eq!(meta.model_id, "c1-fcn-v2");
    assert_eq!(meta.normalization_method, NormalizationMethod::ZScore);
    assert_eq!(meta.input_length, 500);
    assert_eq!(meta.anomaly_class_index, 0);
}

#[test]
fn missing_metadata_is_filled_from_config_and_model() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = DiagConfig::from_toml(&format!(
        "[classification]\nmodel_pool_dir = {:?}\ndefault_normalization = \"dec_norm\"\nanomaly_class_index = 1",
        dir.path().display().to_string()
    ))
    .unwrap();
    let pool = LocalModelPool::from_config(&config.classification);

    let meta = pool.load_metadata("C3", Some(128)).unwrap();
    assert_eq!(meta.model_id, "C3");
    assert_eq!(meta.normalization_method, NormalizationMethod::DecimalScaling);
    assert_eq!(meta.input_length, 128);
    assert_eq!(meta.anomaly_class_index, 1);

    // Neither metadata nor a fixed model dimension: no usable length.
    assert!(pool.load_metadata("C3", None).is_none());
}

#[test]
fn malformed_metadata_yields_none() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("C1.toml"), "input_length = \"many\"").unwrap();
    let pool = LocalModelPool::new(dir.path());
    assert!(pool.load_metadata("C1", Some(10)).is_none());
}
