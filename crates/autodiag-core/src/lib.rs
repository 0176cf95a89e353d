//! # autodiag-core
//!
//! Foundation crate for the autodiag fault isolation system.
//! Defines the shared types, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DiagConfig;
pub use errors::{DiagError, DiagResult};
pub use models::{
    ClassificationMethod, ClassifiedComponents, DiagnosticContext, FaultPath, TimeSeries, Verdict,
};
