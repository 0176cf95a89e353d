//! Trained model pool on the local filesystem.
//!
//! Layout: `<pool>/<component>.onnx` with optional metadata in `<pool>/<component>.toml`.

use std::path::{Path, PathBuf};

use autodiag_core::config::ClassificationConfig;
use autodiag_core::models::{ModelMetadata, NormalizationMethod};
use autodiag_core::traits::{IAnomalyModel, IModelAccessor, LoadedModel};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::onnx_model::OnnxAnomalyModel;

/// Metadata file contents; anything left out is filled from the pool defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MetadataFile {
    model_id: Option<String>,
    normalization_method: Option<NormalizationMethod>,
    input_length: Option<usize>,
    anomaly_class_index: Option<usize>,
}

pub struct LocalModelPool {
    root: PathBuf,
    default_normalization: NormalizationMethod,
    default_anomaly_class_index: usize,
}

impl LocalModelPool {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_normalization: NormalizationMethod::None,
            default_anomaly_class_index: autodiag_core::constants::DEFAULT_ANOMALY_CLASS_INDEX,
        }
    }

    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self {
            root: config.effective_model_pool_dir(),
            default_normalization: config.effective_default_normalization(),
            default_anomaly_class_index: config.effective_anomaly_class_index(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn model_path(&self, component: &str) -> PathBuf {
        self.root.join(format!("{component}.onnx"))
    }

    pub fn metadata_path(&self, component: &str) -> PathBuf {
        self.root.join(format!("{component}.toml"))
    }

    /// Read and complete the metadata for `component`.
    ///
    /// `model_input_length` fills a missing `input_length`. Unreadable files yield `None`.
    pub fn load_metadata(
        &self,
        component: &str,
        model_input_length: Option<usize>,
    ) -> Option<ModelMetadata> {
        let path = self.metadata_path(component);
        let file = if path.exists() {
            let content = match std::fs::read_to_string(&path) {
                Ok(c) => c,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unreadable model metadata");
                    return None;
                }
            };
            match toml::from_str::<MetadataFile>(&content) {
                Ok(f) => f,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid model metadata");
                    return None;
                }
            }
        } else {
            MetadataFile::default()
        };

        let input_length = file.input_length.or(model_input_length)?;
        Some(ModelMetadata {
            model_id: file.model_id.unwrap_or_else(|| component.to_string()),
            normalization_method: file
                .normalization_method
                .unwrap_or(self.default_normalization),
            input_length,
            anomaly_class_index: file
                .anomaly_class_index
                .unwrap_or(self.default_anomaly_class_index),
        })
    }
}

impl IModelAccessor for LocalModelPool {
    fn get_model(&self, component: &str) -> Option<LoadedModel> {
        let path = self.model_path(component);
        if !path.exists() {
            debug!(component = %component, path = %path.display(), "no trained model in pool");
            return None;
        }
        let model = match OnnxAnomalyModel::load(component, &path) {
            Ok(m) => m,
            Err(e) => {
                warn!(component = %component, error = %e, "model could not be loaded");
                return None;
            }
        };
        let metadata = self.load_metadata(component, model.input_shape().dim(1))?;
        Some(LoadedModel {
            model: Box::new(model),
            metadata,
        })
    }
}
