//! Presentation of assessments.
//!
//! Tags stay structured everywhere else; they are joined into text only here.

use serde::Serialize;

use super::types::Assessment;
use crate::logic::risk::{PersonalizedWarnings, RiskVerdict};

pub const SAFE_TEXT: &str = "Safe for your profile";
pub const ML_UNAVAILABLE_TEXT: &str = "unavailable (no model loaded)";

pub fn verdict_text(verdict: RiskVerdict) -> &'static str {
    verdict.label()
}

/// "Asthma Risk, Senior Risk" or the safe message
pub fn warnings_text(warnings: &PersonalizedWarnings) -> String {
    if warnings.is_safe() {
        return SAFE_TEXT.to_string();
    }

    warnings
        .tags()
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display strings for all three outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub ml_prediction: String,
    pub risk: String,
    pub personalized_risk: String,
}

impl AssessmentSummary {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            ml_prediction: assessment
                .ml_prediction
                .as_ref()
                .map(|p| p.label.clone())
                .unwrap_or_else(|| ML_UNAVAILABLE_TEXT.to_string()),
            risk: verdict_text(assessment.verdict).to_string(),
            personalized_risk: warnings_text(&assessment.warnings),
        }
    }
}

/// Multi-line report for terminals
pub fn render_text(assessment: &Assessment) -> String {
    let summary = AssessmentSummary::from_assessment(assessment);
    let r = &assessment.reading;

    let mut out = String::new();
    out.push_str("Prediction Results\n");
    out.push_str(&format!("  ML Prediction (HealthImpactClass): {}\n", summary.ml_prediction));
    out.push_str(&format!("  Risk: {}\n", summary.risk));
    out.push_str(&format!("  Personalized Risk: {}\n", summary.personalized_risk));
    out.push_str("Reading\n");
    out.push_str(&format!(
        "  AQI {} | PM2.5 {:.1} | PM10 {:.1} | NO2 {:.1} | SO2 {:.1} | O3 {:.1}\n",
        r.aqi, r.pm2_5, r.pm10, r.no2, r.so2, r.o3
    ));
    out.push_str(&format!(
        "  {:.1}°C | humidity {:.0}% | wind {:.1} m/s\n",
        r.temperature, r.humidity, r.wind_speed
    ));
    out.push_str(&format!(
        "  local cases: respiratory {} | cardiovascular {}\n",
        r.respiratory_cases, r.cardiovascular_cases
    ));
    out
}
