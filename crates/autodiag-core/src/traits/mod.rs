//! Collaborator interfaces consumed by the diagnosis core.

pub mod human_input;
pub mod knowledge;
pub mod model;
pub mod presentation;
pub mod signal;

pub use human_input::IHumanInput;
pub use knowledge::{IStructuralGraph, ISuspectKnowledge};
pub use model::{IAnomalyModel, IModelAccessor, LoadedModel};
pub use presentation::IPresentation;
pub use signal::ISignalAccessor;
