//! Assessment Pipeline
//!
//! fetch conditions -> build reading -> model label + verdict + warnings
//!
//! A failed fetch stops the pipeline; no verdict is produced from a
//! partial reading.

use std::sync::Arc;

use chrono::Utc;

use super::types::{Assessment, AssessmentError, AssessmentRequest, MlPrediction};
use crate::logic::features::FeatureVector;
use crate::logic::feeds::ConditionsSource;
use crate::logic::model::HealthModel;
use crate::logic::risk::{annotate, classify, EnvironmentalReading, UserProfile};

/// Evaluate an already-built reading
pub fn evaluate_reading(
    reading: &EnvironmentalReading,
    profile: &UserProfile,
    model: Option<&dyn HealthModel>,
) -> Result<Assessment, AssessmentError> {
    let reading = reading.validated()?;
    let profile = profile.validated()?;

    let ml_prediction = match model {
        Some(model) => {
            let features = FeatureVector::from_reading(&reading);
            let label = model.predict(&features)?;
            Some(MlPrediction {
                label,
                model: model.name().to_string(),
            })
        }
        None => None,
    };

    let verdict = classify(&reading);
    let warnings = annotate(&reading, &profile);

    log::info!(
        "Assessment: verdict={} warnings={:?} ml={:?}",
        verdict,
        warnings.tags(),
        ml_prediction.as_ref().map(|p| p.label.as_str())
    );

    Ok(Assessment {
        reading,
        ml_prediction,
        verdict,
        warnings,
        evaluated_at: Utc::now(),
    })
}

/// Runs live assessments against injected collaborators
#[derive(Clone)]
pub struct Assessor {
    source: Arc<dyn ConditionsSource>,
    model: Option<Arc<dyn HealthModel>>,
}

impl Assessor {
    pub fn new(source: Arc<dyn ConditionsSource>, model: Option<Arc<dyn HealthModel>>) -> Self {
        Self { source, model }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Evaluate a reading with this assessor's model
    pub fn evaluate(
        &self,
        reading: &EnvironmentalReading,
        profile: &UserProfile,
    ) -> Result<Assessment, AssessmentError> {
        evaluate_reading(reading, profile, self.model.as_deref())
    }

    /// Evaluate from async code.
    ///
    /// Model inference is synchronous, so with a model present the
    /// evaluation runs on the blocking pool instead of a runtime worker.
    pub async fn evaluate_async(
        &self,
        reading: EnvironmentalReading,
        profile: UserProfile,
    ) -> Result<Assessment, AssessmentError> {
        match &self.model {
            Some(model) => {
                let model = Arc::clone(model);
                tokio::task::spawn_blocking(move || {
                    evaluate_reading(&reading, &profile, Some(model.as_ref()))
                })
                .await?
            }
            None => evaluate_reading(&reading, &profile, None),
        }
    }

    /// Fetch live conditions and evaluate them
    pub async fn assess(&self, request: &AssessmentRequest) -> Result<Assessment, AssessmentError> {
        let profile = request.profile.validated()?;

        let conditions = self.source.fetch(request.coordinates).await.map_err(|e| {
            log::error!("Feed fetch failed for {}: {}", request.coordinates, e);
            e
        })?;

        let reading = conditions.into_reading(request.local_health);
        self.evaluate_async(reading, profile).await
    }
}
