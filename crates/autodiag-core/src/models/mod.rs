//! Domain models shared across the workspace.

pub mod classification;
pub mod fault_path;
pub mod graph_view;
pub mod model_metadata;
pub mod obd;
pub mod signal;
pub mod suspect;

pub use classification::{
    ClassificationArtifact, ClassificationMethod, ClassificationRecord, ClassifiedComponents,
    DiagnosisStage, DiagnosticContext, Verdict,
};
pub use fault_path::FaultPath;
pub use graph_view::{CausalGraphView, GraphEdgeView, GraphPhase, LinkStatus};
pub use model_metadata::{ModelMetadata, NormalizationMethod, TensorShape};
pub use obd::OnboardDiagnosisData;
pub use signal::{Channel, TimeSeries};
pub use suspect::SuspectComponent;
