//! Risk Types
//!
//! Core types for risk evaluation.
//! NO decision logic here - only data structures and input validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ENVIRONMENTAL READING
// ============================================================================

/// One air-quality / weather / local-health observation for a location.
///
/// Missing source values must be defaulted (usually to 0) by the caller
/// before construction; the engine treats every field as present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    /// PM10 concentration (µg/m³)
    pub pm10: f64,
    /// PM2.5 concentration (µg/m³)
    pub pm2_5: f64,
    /// Nitrogen dioxide (µg/m³)
    pub no2: f64,
    /// Sulphur dioxide (µg/m³)
    pub so2: f64,
    /// Ozone (µg/m³)
    pub o3: f64,
    /// Temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Air quality index as reported by the feed
    pub aqi: u32,
    /// Locally reported respiratory cases
    #[serde(default)]
    pub respiratory_cases: u32,
    /// Locally reported cardiovascular cases
    #[serde(default)]
    pub cardiovascular_cases: u32,
}

impl EnvironmentalReading {
    /// Check that every measurement is finite and pollutant
    /// concentrations are non-negative.
    pub fn validated(self) -> Result<Self, InvalidInput> {
        let pollutants = [
            ("pm10", self.pm10),
            ("pm2_5", self.pm2_5),
            ("no2", self.no2),
            ("so2", self.so2),
            ("o3", self.o3),
        ];
        for (field, value) in pollutants {
            if !value.is_finite() {
                return Err(InvalidInput::NotFinite { field });
            }
            if value < 0.0 {
                return Err(InvalidInput::NegativeConcentration { field, value });
            }
        }

        let weather = [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("wind_speed", self.wind_speed),
        ];
        for (field, value) in weather {
            if !value.is_finite() {
                return Err(InvalidInput::NotFinite { field });
            }
        }

        Ok(self)
    }

    /// Attach local case counts to this reading
    pub fn with_local_health(mut self, local: LocalHealthData) -> Self {
        self.respiratory_cases = local.respiratory_cases;
        self.cardiovascular_cases = local.cardiovascular_cases;
        self
    }
}

/// User-entered case counts for the surrounding area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalHealthData {
    #[serde(default)]
    pub respiratory_cases: u32,
    #[serde(default)]
    pub cardiovascular_cases: u32,
}

impl LocalHealthData {
    pub fn new(respiratory_cases: u32, cardiovascular_cases: u32) -> Self {
        Self {
            respiratory_cases,
            cardiovascular_cases,
        }
    }
}

// ============================================================================
// USER PROFILE
// ============================================================================

/// Personal medical profile, read-only to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    #[serde(default)]
    pub has_asthma: bool,
    #[serde(default)]
    pub has_heart_disease: bool,
}

impl UserProfile {
    /// Create a profile with no known conditions
    pub fn new(age: u32) -> Self {
        Self {
            age,
            has_asthma: false,
            has_heart_disease: false,
        }
    }

    pub fn with_asthma(mut self, has_asthma: bool) -> Self {
        self.has_asthma = has_asthma;
        self
    }

    pub fn with_heart_disease(mut self, has_heart_disease: bool) -> Self {
        self.has_heart_disease = has_heart_disease;
        self
    }

    /// Age must be positive
    pub fn validated(self) -> Result<Self, InvalidInput> {
        if self.age == 0 {
            return Err(InvalidInput::InvalidAge(self.age));
        }
        Ok(self)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(30)
    }
}

// ============================================================================
// RISK VERDICT
// ============================================================================

/// Single, mutually exclusive verdict of the threshold classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskVerdict {
    HighRiskAsthma,
    HighRiskHeart,
    LowOrModerateRisk,
}

impl RiskVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskVerdict::HighRiskAsthma => "high_risk_asthma",
            RiskVerdict::HighRiskHeart => "high_risk_heart",
            RiskVerdict::LowOrModerateRisk => "low_or_moderate_risk",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            RiskVerdict::HighRiskAsthma => "High Risk for Asthma",
            RiskVerdict::HighRiskHeart => "High Risk for Heart Patients",
            RiskVerdict::LowOrModerateRisk => "Low or Moderate Risk",
        }
    }

    pub fn is_high_risk(&self) -> bool {
        !matches!(self, RiskVerdict::LowOrModerateRisk)
    }
}

impl std::fmt::Display for RiskVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// PERSONALIZED WARNINGS
// ============================================================================

/// Personalized warning tag. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningTag {
    AsthmaRisk,
    HeartRisk,
    SeniorRisk,
}

impl WarningTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningTag::AsthmaRisk => "asthma_risk",
            WarningTag::HeartRisk => "heart_risk",
            WarningTag::SeniorRisk => "senior_risk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WarningTag::AsthmaRisk => "Asthma Risk",
            WarningTag::HeartRisk => "Heart Risk",
            WarningTag::SeniorRisk => "Senior Risk",
        }
    }
}

impl std::fmt::Display for WarningTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered warning tags for one person. Empty means "safe".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalizedWarnings {
    tags: Vec<WarningTag>,
}

impl PersonalizedWarnings {
    /// The "Safe" sentinel
    pub fn safe() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, tag: WarningTag) {
        self.tags.push(tag);
    }

    pub fn is_safe(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[WarningTag] {
        &self.tags
    }

    pub fn contains(&self, tag: WarningTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

// ============================================================================
// INPUT VALIDATION ERRORS
// ============================================================================

/// Rejected reading or profile
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} concentration cannot be negative (got {value})")]
    NegativeConcentration { field: &'static str, value: f64 },

    #[error("age must be a positive number (got {0})")]
    InvalidAge(u32),
}
