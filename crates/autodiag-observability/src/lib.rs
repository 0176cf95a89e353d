//! # autodiag-observability
//!
//! `tracing` subscriber setup and the structured events emitted during a diagnosis.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
