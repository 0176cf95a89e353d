//! Compiled default values for every config field.

pub const DEFAULT_MODEL_POOL_DIR: &str = "res/trained_model_pool";
pub const DEFAULT_SINGLE_SCORE_THRESHOLD: f64 = crate::constants::DEFAULT_SINGLE_SCORE_THRESHOLD;
pub const DEFAULT_ANOMALY_CLASS_INDEX: usize = crate::constants::DEFAULT_ANOMALY_CLASS_INDEX;
pub const DEFAULT_MAX_GRAPH_COMPONENTS: usize = 10_000;
pub const DEFAULT_SHOW_GRAPH_PREVIEW: bool = true;
pub const DEFAULT_CLASSIFICATION_LOG_PATH: &str = "session_files/classifications.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
