//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use thiserror::Error;

use airwise_core::logic::feeds::FeedError;
use airwise_core::logic::location::LocationError;
use airwise_core::AssessmentError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Validation errors
    #[error("{0}")]
    ValidationError(String),

    // External service errors
    #[error("{0}")]
    ExternalServiceError(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    // Generic errors
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ExternalServiceError(msg) => {
                tracing::error!("External service error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Could not fetch weather or air quality data for the location: {}", msg),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<AssessmentError> for AppError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Feed(FeedError::NotConfigured) => {
                AppError::ServiceUnavailable("Live feeds are not configured on this server".to_string())
            }
            AssessmentError::Feed(e) => AppError::ExternalServiceError(e.to_string()),
            AssessmentError::Inference(e) => AppError::InternalError(e.to_string()),
            AssessmentError::InvalidInput(e) => AppError::ValidationError(e.to_string()),
            AssessmentError::Task(e) => AppError::InternalError(e.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airwise_core::logic::model::InferenceError;

    #[test]
    fn test_assessment_error_status_codes() {
        let cases = [
            (AssessmentError::Feed(FeedError::NotConfigured), StatusCode::SERVICE_UNAVAILABLE),
            (
                AssessmentError::Feed(FeedError::Status { feed: "weather", status: 500 }),
                StatusCode::BAD_GATEWAY,
            ),
            (AssessmentError::Inference(InferenceError::EmptyOutput), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
