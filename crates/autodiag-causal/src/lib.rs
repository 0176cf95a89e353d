//! # autodiag-causal
//!
//! The fault isolation core. Expands the structural "affected-by" graph around anomalous
//! components, searches it for fault paths while classifying each component at most once,
//! and turns the result into presentable paths and labelled graphs.

pub mod engine;
pub mod graph;
pub mod isolation;
pub mod report;

pub use engine::{DiagnosisOutcome, IsolationEngine};
pub use graph::{CausalGraphBuilder, CompleteGraph, IndexedGraph};
pub use isolation::{ExplicitlyConsideredLinks, FaultIsolator, IsolationReport, VerdictCache};
pub use report::{labelled_view, preview_view, render, to_dot};
