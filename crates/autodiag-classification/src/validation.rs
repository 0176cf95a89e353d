//! Model shape checks. A failing check sends the component to manual inspection.

use autodiag_core::errors::ClassificationError;
use autodiag_core::models::TensorShape;
use autodiag_core::traits::LoadedModel;

/// Batch dimension may be dynamic or fixed at 1.
fn batch_ok(shape: &TensorShape) -> bool {
    matches!(shape.0.first(), Some(None) | Some(Some(1)))
}

/// Check a model against the recording it is about to classify.
///
/// Input must be `(batch, len, 1)` and output `(batch, classes)` with `classes >= 1`.
/// `len` must equal both the metadata input length and `recording_len`.
pub fn validate_model_shapes(
    component: &str,
    model: &LoadedModel,
    recording_len: usize,
) -> Result<(), ClassificationError> {
    let invalid = |reason: String| ClassificationError::InvalidModelShape {
        component: component.to_string(),
        reason,
    };

    let input = model.model.input_shape();
    if input.rank() != 3 || !batch_ok(&input) || input.dim(2) != Some(1) {
        return Err(invalid(format!(
            "unexpected input shape - expected: (None, len, 1), got: {input}"
        )));
    }
    let expected_len = model.metadata.input_length;
    if let Some(len) = input.dim(1) {
        if len != expected_len {
            return Err(invalid(format!(
                "model input length {len} disagrees with metadata input length {expected_len}"
            )));
        }
    }
    if recording_len != expected_len {
        return Err(invalid(format!(
            "recording has {recording_len} samples, model expects {expected_len}"
        )));
    }

    let output = model.model.output_shape();
    let classes = output.dim(1).unwrap_or(0);
    if output.rank() != 2 || !batch_ok(&output) || classes == 0 {
        return Err(invalid(format!(
            "unexpected output shape - expected: (None, classes), got: {output}"
        )));
    }
    if classes > 1 && model.metadata.anomaly_class_index >= classes {
        return Err(invalid(format!(
            "anomaly class index {} out of range for {classes} classes",
            model.metadata.anomaly_class_index
        )));
    }
    Ok(())
}
