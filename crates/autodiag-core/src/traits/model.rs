use crate::errors::ClassificationError;
use crate::models::{ModelMetadata, TensorShape};

/// A trained anomaly detection model.
pub trait IAnomalyModel: Send + Sync {
    /// Expected input shape, e.g. `(None, len, 1)`.
    fn input_shape(&self) -> TensorShape;

    /// Output shape, e.g. `(None, classes)`.
    fn output_shape(&self) -> TensorShape;

    /// Class scores for one univariate sample sequence.
    fn predict(&self, input: &[f64]) -> Result<Vec<f64>, ClassificationError>;
}

/// A model together with the metadata describing its preprocessing.
pub struct LoadedModel {
    pub model: Box<dyn IAnomalyModel>,
    pub metadata: ModelMetadata,
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("metadata", &self.metadata)
            .field("input_shape", &self.model.input_shape())
            .field("output_shape", &self.model.output_shape())
            .finish()
    }
}

/// Looks up trained models by component.
pub trait IModelAccessor: Send + Sync {
    /// `None` when no trained or compatible model exists for `component`.
    fn get_model(&self, component: &str) -> Option<LoadedModel>;
}
