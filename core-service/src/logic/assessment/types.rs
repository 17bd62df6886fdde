//! Assessment Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::feeds::FeedError;
use crate::logic::location::Coordinates;
use crate::logic::model::InferenceError;
use crate::logic::risk::{
    EnvironmentalReading, InvalidInput, LocalHealthData, PersonalizedWarnings, RiskVerdict,
    UserProfile,
};

/// Everything the user supplies for a live assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub coordinates: Coordinates,
    pub profile: UserProfile,
    #[serde(default)]
    pub local_health: LocalHealthData,
}

/// Label from the health model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlPrediction {
    pub label: String,
    /// Which model produced it
    pub model: String,
}

/// The three parallel outputs for one reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub reading: EnvironmentalReading,
    /// `None` when no model is configured
    pub ml_prediction: Option<MlPrediction>,
    pub verdict: RiskVerdict,
    pub warnings: PersonalizedWarnings,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("could not fetch weather or air quality data: {0}")]
    Feed(#[from] FeedError),

    #[error("health model: {0}")]
    Inference(#[from] InferenceError),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("evaluation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
