//! Tracing setup: subscriber installation and structured events.

pub mod events;

use autodiag_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "AUTODIAG_LOG";

/// Install a JSON subscriber filtered by `AUTODIAG_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Install a subscriber from config. `AUTODIAG_LOG` still wins over `log_level`.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.effective_json_logs() {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}

/// Install a subscriber with an explicit filter (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_test_writer()
        .try_init()
        .is_ok()
}
