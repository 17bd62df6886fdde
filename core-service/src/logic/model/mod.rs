//! Model Module - ML Inference
//!
//! The health-impact classifier is an injected collaborator: it is loaded
//! once at startup and handed to the assessment pipeline as a
//! `dyn HealthModel`. Nothing in the risk engine depends on it.

pub mod inference;

use std::path::Path;
use std::sync::Arc;

pub use inference::{HealthModel, InferenceError, ModelMetadata, OnnxHealthModel};

/// Load the configured model, if any.
///
/// `None` means no model was configured; a configured but unreadable
/// model is an error.
pub fn load_health_model(path: Option<&Path>) -> Result<Option<Arc<dyn HealthModel>>, InferenceError> {
    match path {
        Some(path) => {
            let model = OnnxHealthModel::load(path)?;
            Ok(Some(Arc::new(model)))
        }
        None => {
            log::info!("No health model configured - ML prediction disabled");
            Ok(None)
        }
    }
}
