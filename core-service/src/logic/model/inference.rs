//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the exported health-impact classifier and runs it on one
//! feature vector at a time.
//!
//! ## Label sidecar
//! The classifier outputs an integer class. A JSON file next to the model
//! (`health_model.onnx` -> `health_model.labels.json`) may map classes to
//! display labels:
//!
//! ```json
//! { "labels": ["Very Low", "Low", "Moderate", "High", "Very High"],
//!   "features": ["pm10", "pm2_5", "no2", "so2", "o3", "temperature", "humidity", "wind_speed"] }
//! ```
//!
//! Without a sidecar the class number itself is the label.

use std::path::{Path, PathBuf};
use std::time::Instant;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::features::{layout::matches_layout, FeatureVector, FEATURE_COUNT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model not found: {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("failed to load model: {0}")]
    Load(String),

    #[error("invalid label file {}: {message}", .path.display())]
    InvalidSidecar { path: PathBuf, message: String },

    #[error("inference failed: {0}")]
    Run(String),

    #[error("model produced no output")]
    EmptyOutput,
}

// ============================================================================
// HEALTH MODEL TRAIT
// ============================================================================

/// Classifier that maps the 8 model features to a health-impact label.
///
/// Loaded once at startup and shared; implementations must be thread safe.
pub trait HealthModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<String, InferenceError>;

    /// Short identifier for logs and reports
    fn name(&self) -> &str;
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub labels: Option<Vec<String>>,
    pub features: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Contents of `<model>.labels.json`
#[derive(Debug, Clone, Default, Deserialize)]
struct LabelSidecar {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    features: Option<Vec<String>>,
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

pub struct OnnxHealthModel {
    session: Mutex<Session>,
    metadata: ModelMetadata,
}

impl OnnxHealthModel {
    /// Load ONNX model from file, together with its label sidecar if present
    pub fn load(model_path: &Path) -> Result<Self, InferenceError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(InferenceError::ModelNotFound(model_path.to_path_buf()));
        }

        let labels = load_labels(&sidecar_path(model_path))?;

        let session = Session::builder()
            .map_err(|e| InferenceError::Load(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Load(format!("optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::Load(e.to_string()))?;

        log::info!(
            "ONNX model loaded ({} labels)",
            labels.as_ref().map(Vec::len).unwrap_or(0)
        );

        Ok(Self {
            session: Mutex::new(session),
            metadata: ModelMetadata {
                model_path: model_path.display().to_string(),
                labels,
                features: FEATURE_COUNT,
                loaded_at: chrono::Utc::now(),
            },
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn run(&self, features: &FeatureVector) -> Result<i64, InferenceError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.as_slice().to_vec())
            .map_err(|e| InferenceError::Run(format!("array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Run(format!("tensor error: {}", e)))?;

        let mut session = self.session.lock();

        // Classifiers exported from scikit-learn put the label first
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or(InferenceError::EmptyOutput)?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Run(e.to_string()))?;

        let output = outputs.get(&output_name).ok_or(InferenceError::EmptyOutput)?;

        let (_, data) = output
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError::Run(format!("extract error: {}", e)))?;

        data.first().copied().ok_or(InferenceError::EmptyOutput)
    }
}

impl HealthModel for OnnxHealthModel {
    fn predict(&self, features: &FeatureVector) -> Result<String, InferenceError> {
        let start_time = Instant::now();
        let class = self.run(features)?;
        let label = label_for(class, self.metadata.labels.as_deref());

        log::debug!(
            "ONNX prediction: class {} -> {:?} in {}us",
            class,
            label,
            start_time.elapsed().as_micros()
        );

        Ok(label)
    }

    fn name(&self) -> &str {
        "onnx"
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// `models/health_model.onnx` -> `models/health_model.labels.json`
pub fn sidecar_path(model_path: &Path) -> PathBuf {
    model_path.with_extension("labels.json")
}

/// Read the label sidecar. A missing file is not an error.
fn load_labels(path: &Path) -> Result<Option<Vec<String>>, InferenceError> {
    if !path.exists() {
        log::debug!("No label sidecar at {}", path.display());
        return Ok(None);
    }

    let invalid = |message: String| InferenceError::InvalidSidecar {
        path: path.to_path_buf(),
        message,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let sidecar: LabelSidecar = serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?;

    if let Some(features) = &sidecar.features {
        if !matches_layout(features.as_slice()) {
            return Err(invalid(format!(
                "model was trained on features {:?}, expected the current layout",
                features
            )));
        }
    }

    if sidecar.labels.is_empty() {
        Ok(None)
    } else {
        Ok(Some(sidecar.labels))
    }
}

/// Map a class number to its label, falling back to the number itself
fn label_for(class: i64, labels: Option<&[String]>) -> String {
    usize::try_from(class)
        .ok()
        .and_then(|i| labels.and_then(|l| l.get(i)))
        .cloned()
        .unwrap_or_else(|| class.to_string())
}
