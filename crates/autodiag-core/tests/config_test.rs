//! Tests for the layered configuration.

use std::path::PathBuf;
use std::sync::Mutex;

use autodiag_core::config::{CliOverrides, DiagConfig};
use autodiag_core::errors::ConfigError;
use autodiag_core::models::NormalizationMethod;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_autodiag_env_vars() {
    for key in [
        "AUTODIAG_MODEL_POOL_DIR",
        "AUTODIAG_SINGLE_SCORE_THRESHOLD",
        "AUTODIAG_ANOMALY_CLASS_INDEX",
        "AUTODIAG_DEFAULT_NORMALIZATION",
        "AUTODIAG_MAX_GRAPH_COMPONENTS",
        "AUTODIAG_SHOW_GRAPH_PREVIEW",
        "AUTODIAG_CLASSIFICATION_LOG",
        "AUTODIAG_LOG_LEVEL",
        "AUTODIAG_JSON_LOGS",
    ] {
        std::env::remove_var(key);
    }
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn cli_beats_env_beats_project_beats_user() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_autodiag_env_vars();

    let dir = tempdir();
    let user = dir.path().join("user.toml");
    std::fs::write(
        &user,
        r#"
[classification]
model_pool_dir = "/user/pool"
single_score_threshold = 0.3

[observability]
log_level = "warn"
"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("autodiag.toml"),
        r#"
[classification]
model_pool_dir = "/project/pool"

[isolation]
max_graph_components = 500
"#,
    )
    .unwrap();

    std::env::set_var("AUTODIAG_MAX_GRAPH_COMPONENTS", "800");
    std::env::set_var("AUTODIAG_LOG_LEVEL", "debug");

    let cli = CliOverrides {
        log_level: Some("trace".into()),
        ..Default::default()
    };
    let config = DiagConfig::load_with_user_config(dir.path(), Some(&user), Some(&cli)).unwrap();

    assert_eq!(
        config.classification.effective_model_pool_dir(),
        PathBuf::from("/project/pool")
    );
    assert_eq!(config.classification.effective_single_score_threshold(), 0.3);
    assert_eq!(config.isolation.effective_max_graph_components(), 800);
    assert_eq!(config.observability.effective_log_level(), "trace");

    clear_autodiag_env_vars();
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_autodiag_env_vars();

    let dir = tempdir();
    let config = DiagConfig::load_with_user_config(dir.path(), None, None).unwrap();

    assert_eq!(
        config.classification.effective_model_pool_dir(),
        PathBuf::from("res/trained_model_pool")
    );
    assert_eq!(config.classification.effective_single_score_threshold(), 0.5);
    assert_eq!(config.classification.effective_anomaly_class_index(), 0);
    assert_eq!(
        config.classification.effective_default_normalization(),
        NormalizationMethod::None
    );
    assert_eq!(config.isolation.effective_max_graph_components(), 10_000);
    assert!(config.isolation.effective_show_graph_preview());
    assert_eq!(
        config.session.effective_classification_log_path(),
        PathBuf::from("session_files/classifications.json")
    );
    assert_eq!(config.observability.effective_log_level(), "info");
    assert!(!config.observability.effective_json_logs());
}

#[test]
fn env_sets_anomaly_class_and_preview() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_autodiag_env_vars();

    std::env::set_var("AUTODIAG_ANOMALY_CLASS_INDEX", "2");
    std::env::set_var("AUTODIAG_SHOW_GRAPH_PREVIEW", "false");

    let dir = tempdir();
    let config = DiagConfig::load_with_user_config(dir.path(), None, None).unwrap();
    assert_eq!(config.classification.effective_anomaly_class_index(), 2);
    assert!(!config.isolation.effective_show_graph_preview());

    let cli = CliOverrides {
        show_graph_preview: Some(true),
        ..Default::default()
    };
    let config = DiagConfig::load_with_user_config(dir.path(), None, Some(&cli)).unwrap();
    assert!(config.isolation.effective_show_graph_preview());

    clear_autodiag_env_vars();
}

#[test]
fn unparseable_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_autodiag_env_vars();

    std::env::set_var("AUTODIAG_MAX_GRAPH_COMPONENTS", "lots");
    std::env::set_var("AUTODIAG_JSON_LOGS", "yes please");
    std::env::set_var("AUTODIAG_DEFAULT_NORMALIZATION", "z_norm");

    let dir = tempdir();
    let config = DiagConfig::load_with_user_config(dir.path(), None, None).unwrap();
    assert_eq!(config.isolation.max_graph_components, None);
    assert_eq!(config.observability.json_logs, None);
    assert_eq!(
        config.classification.default_normalization,
        Some(NormalizationMethod::ZScore)
    );

    clear_autodiag_env_vars();
}

#[test]
fn invalid_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_autodiag_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("autodiag.toml"), "[isolation\nbroken").unwrap();
    let err = DiagConfig::load_with_user_config(dir.path(), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn threshold_outside_open_unit_interval_is_rejected() {
    for bad in ["0.0", "1.0", "1.5", "-0.1"] {
        let config =
            DiagConfig::from_toml(&format!("[classification]\nsingle_score_threshold = {bad}"))
                .unwrap();
        let err = DiagConfig::validate(&config).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "classification.single_score_threshold")
        );
    }
}

#[test]
fn zero_component_limit_is_rejected() {
    let config = DiagConfig::from_toml("[isolation]\nmax_graph_components = 0").unwrap();
    assert!(DiagConfig::validate(&config).is_err());
}

#[test]
fn unknown_keys_are_ignored() {
    let config = DiagConfig::from_toml(
        r#"
[isolation]
show_graph_preview = false
future_knob = 3
"#,
    )
    .unwrap();
    assert_eq!(config.isolation.show_graph_preview, Some(false));
}

#[test]
fn normalization_names_parse_in_toml() {
    let config =
        DiagConfig::from_toml("[classification]\ndefault_normalization = \"min_max_norm\"").unwrap();
    assert_eq!(
        config.classification.default_normalization,
        Some(NormalizationMethod::MinMax)
    );
}

#[test]
fn to_toml_round_trips_set_fields() {
    let config = DiagConfig::from_toml(
        r#"
[classification]
model_pool_dir = "pool"
single_score_threshold = 0.4

[session]
classification_log_path = "log.json"
"#,
    )
    .unwrap();
    let back = DiagConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(back.classification.single_score_threshold, Some(0.4));
    assert_eq!(
        back.session.classification_log_path,
        Some(PathBuf::from("log.json"))
    );
}
