//! Assessment handlers

use axum::{extract::State, Json};
use validator::Validate;

use crate::models::{AssessRequest, AssessmentResponse, EvaluateRequest};
use crate::{AppResult, AppState};

/// Fetch live conditions for a location and assess them
pub async fn assess(
    State(state): State<AppState>,
    Json(req): Json<AssessRequest>,
) -> AppResult<Json<AssessmentResponse>> {
    req.validate()?;
    let request = req.into_request()?;

    let assessment = state.assessor.assess(&request).await?;

    tracing::info!(
        location = %request.coordinates,
        verdict = assessment.verdict.as_str(),
        warnings = assessment.warnings.len(),
        "Assessment completed"
    );

    Ok(Json(AssessmentResponse::new(Some(request.coordinates), assessment)))
}

/// Assess a caller-supplied reading without touching the feeds
pub async fn evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> AppResult<Json<AssessmentResponse>> {
    req.validate()?;

    let assessment = state
        .assessor
        .evaluate_async(req.reading.into(), req.profile.into())
        .await?;

    tracing::debug!(verdict = assessment.verdict.as_str(), "Reading evaluated");

    Ok(Json(AssessmentResponse::new(None, assessment)))
}
