//! File-backed collaborators for running a diagnosis from local data.

pub mod knowledge_base;
pub mod recordings;

pub use knowledge_base::LocalKnowledgeBase;
pub use recordings::LocalRecordingStore;
