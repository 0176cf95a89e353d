/// autodiag system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between components in a rendered fault path.
pub const FAULT_PATH_SEPARATOR: &str = " -> ";

/// Minimum number of samples a recorded channel must carry.
pub const MIN_SAMPLES_PER_CHANNEL: usize = 2;

/// Index of the "anomaly" class in multi-class model outputs.
pub const DEFAULT_ANOMALY_CLASS_INDEX: usize = 0;

/// Single-score models report an anomaly when the score is at or below this value.
pub const DEFAULT_SINGLE_SCORE_THRESHOLD: f64 = 0.5;
