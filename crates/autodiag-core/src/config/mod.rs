//! Configuration system for autodiag.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod classification_config;
pub mod defaults;
pub mod diag_config;
pub mod isolation_config;
pub mod observability_config;
pub mod session_config;

pub use classification_config::ClassificationConfig;
pub use diag_config::{CliOverrides, DiagConfig};
pub use isolation_config::IsolationConfig;
pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
