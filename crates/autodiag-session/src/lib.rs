//! # autodiag-session
//!
//! The diagnosis stages surrounding fault isolation, kept in-process.
//!
//! ## Modules
//!
//! - `dtc`: pick the next unused trouble code
//! - `suggestion`: ordered suspect components for a trouble code
//! - `classification_stage`: classify the suspects, decide whether isolation is needed
//! - `classification_log`: append-only JSON record of every classification
//! - `context`: `DiagnosisSession` passed between stages
//! - `runner`: `SessionRunner` driving the stages to a diagnosis
//! - `io`: file-backed knowledge base and signal recordings

pub mod classification_log;
pub mod classification_stage;
pub mod context;
pub mod dtc;
pub mod io;
pub mod runner;
pub mod suggestion;

pub use classification_log::ClassificationLog;
pub use classification_stage::{classify_suspects, ClassificationOutcome, ComponentClassification};
pub use context::DiagnosisSession;
pub use dtc::{dedup_dtcs, select_dtc_instance, DtcSelection};
pub use io::{LocalKnowledgeBase, LocalRecordingStore};
pub use runner::{SessionOutcome, SessionReport, SessionRunner};
pub use suggestion::{suggest_suspect_components, SuspectSuggestion};
