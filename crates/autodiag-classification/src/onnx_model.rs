//! ONNX Runtime anomaly model.
//!
//! Loads trained univariate time series classifiers via the `ort` crate (v2).

use std::path::Path;
use std::sync::Mutex;

use autodiag_core::errors::ClassificationError;
use autodiag_core::models::TensorShape;
use autodiag_core::traits::IAnomalyModel;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

/// ONNX-backed [`IAnomalyModel`] expecting `(batch, len, 1)` float input.
pub struct OnnxAnomalyModel {
    /// `run` needs `&mut Session`; the trait only hands out `&self`.
    session: Mutex<Session>,
    input_shape: TensorShape,
    output_shape: TensorShape,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for OnnxAnomalyModel {}

fn to_tensor_shape(dims: &[i64]) -> TensorShape {
    TensorShape::new(
        dims.iter()
            .map(|&d| if d < 0 { None } else { Some(d as usize) })
            .collect(),
    )
}

impl OnnxAnomalyModel {
    /// Load an ONNX model from `model_path`.
    ///
    /// # Errors
    /// `ModelUnavailable` if the file is missing, `InvalidModelShape` if it cannot be loaded.
    pub fn load(component: &str, model_path: &Path) -> Result<Self, ClassificationError> {
        if !model_path.exists() {
            return Err(ClassificationError::ModelUnavailable {
                component: component.to_string(),
            });
        }
        let load_failed = |e: ort::Error| ClassificationError::InvalidModelShape {
            component: component.to_string(),
            reason: format!("failed to load {}: {e}", model_path.display()),
        };

        let session = Session::builder()
            .map_err(load_failed)?
            .with_intra_threads(2)
            .map_err(load_failed)?
            .commit_from_file(model_path)
            .map_err(load_failed)?;

        let input_shape = session
            .inputs()
            .first()
            .and_then(|i| i.dtype().tensor_shape())
            .map(|s| to_tensor_shape(s))
            .ok_or_else(|| ClassificationError::InvalidModelShape {
                component: component.to_string(),
                reason: "model has no tensor input".to_string(),
            })?;
        let output_shape = session
            .outputs()
            .first()
            .and_then(|o| o.dtype().tensor_shape())
            .map(|s| to_tensor_shape(s))
            .ok_or_else(|| ClassificationError::InvalidModelShape {
                component: component.to_string(),
                reason: "model has no tensor output".to_string(),
            })?;

        let model_name = model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(component)
            .to_string();

        debug!(model = %model_name, input = %input_shape, output = %output_shape, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            input_shape,
            output_shape,
            model_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.model_name
    }
}

impl IAnomalyModel for OnnxAnomalyModel {
    fn input_shape(&self) -> TensorShape {
        self.input_shape.clone()
    }

    fn output_shape(&self) -> TensorShape {
        self.output_shape.clone()
    }

    fn predict(&self, input: &[f64]) -> Result<Vec<f64>, ClassificationError> {
        let data: Vec<f32> = input.iter().map(|&x| x as f32).collect();
        let tensor = Tensor::from_array((vec![1i64, data.len() as i64, 1], data)).map_err(|e| {
            ClassificationError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            }
        })?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| ClassificationError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| ClassificationError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| ClassificationError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        let (_shape, scores) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| ClassificationError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        Ok(scores.iter().map(|&s| f64::from(s)).collect())
    }
}
