//! # autodiag-classification
//!
//! Classification oracle for component anomaly verdicts.
//! Automated strategies (trained ONNX models, rule-based signal checks) with manual fallback.

pub mod automated;
pub mod model_pool;
pub mod onnx_model;
pub mod oracle;
pub mod preprocess;
pub mod rule_based;
pub mod validation;
pub mod verdict;

pub use automated::{AutomatedClassification, AutomatedClassifier, ClassifierSettings};
pub use model_pool::LocalModelPool;
pub use onnx_model::OnnxAnomalyModel;
pub use oracle::{ClassificationOracle, ClassificationStrategy};
pub use rule_based::{ReferenceRule, RuleBasedModel, RuleBasedRegistry};
