//! Risk Rules & Thresholds
//!
//! Thresholds for the population verdict and the personalized warnings.
//! NO classify logic here - only constants and config.
//!
//! All comparisons are strict: a value exactly at a threshold does not trigger.

use serde::{Deserialize, Serialize};

// ============================================================================
// POPULATION VERDICT - ASTHMA RULE
// ============================================================================

/// PM2.5 above this = asthma-relevant pollution
pub const ASTHMA_PM2_5_THRESHOLD: f64 = 100.0;

/// AQI above this = asthma-relevant pollution
pub const ASTHMA_AQI_THRESHOLD: u32 = 200;

/// Respiratory cases above this confirm the asthma verdict
pub const RESPIRATORY_CASES_THRESHOLD: u32 = 7;

// ============================================================================
// POPULATION VERDICT - HEART RULE
// ============================================================================

/// NO2 above this = cardiovascular-relevant pollution
pub const HEART_NO2_THRESHOLD: f64 = 80.0;

/// PM10 above this = cardiovascular-relevant pollution
pub const HEART_PM10_THRESHOLD: f64 = 120.0;

/// Cardiovascular cases above this confirm the heart verdict
pub const CARDIOVASCULAR_CASES_THRESHOLD: u32 = 5;

// ============================================================================
// PERSONALIZED WARNINGS
// ============================================================================

/// PM2.5 above this warns people with asthma
pub const PERSONAL_ASTHMA_PM2_5_THRESHOLD: f64 = 90.0;

/// NO2 above this warns people with heart disease
pub const PERSONAL_HEART_NO2_THRESHOLD: f64 = 80.0;

/// Older than this counts as senior
pub const SENIOR_AGE_THRESHOLD: u32 = 60;

/// AQI above this warns seniors
pub const SENIOR_AQI_THRESHOLD: u32 = 150;

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Thresholds for the population verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictThresholds {
    pub asthma_pm2_5: f64,
    pub asthma_aqi: u32,
    pub respiratory_cases: u32,
    pub heart_no2: f64,
    pub heart_pm10: f64,
    pub cardiovascular_cases: u32,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            asthma_pm2_5: ASTHMA_PM2_5_THRESHOLD,
            asthma_aqi: ASTHMA_AQI_THRESHOLD,
            respiratory_cases: RESPIRATORY_CASES_THRESHOLD,
            heart_no2: HEART_NO2_THRESHOLD,
            heart_pm10: HEART_PM10_THRESHOLD,
            cardiovascular_cases: CARDIOVASCULAR_CASES_THRESHOLD,
        }
    }
}

/// Thresholds for personalized warnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalThresholds {
    pub asthma_pm2_5: f64,
    pub heart_no2: f64,
    pub senior_age: u32,
    pub senior_aqi: u32,
}

impl Default for PersonalThresholds {
    fn default() -> Self {
        Self {
            asthma_pm2_5: PERSONAL_ASTHMA_PM2_5_THRESHOLD,
            heart_no2: PERSONAL_HEART_NO2_THRESHOLD,
            senior_age: SENIOR_AGE_THRESHOLD,
            senior_aqi: SENIOR_AQI_THRESHOLD,
        }
    }
}
