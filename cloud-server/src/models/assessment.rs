//! Assessment request / response models

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use airwise_core::logic::assessment::AssessmentSummary;
use airwise_core::logic::location::{Coordinates, LocationError};
use airwise_core::{Assessment, AssessmentRequest, EnvironmentalReading, LocalHealthData, UserProfile};

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct ProfileInput {
    #[validate(range(min = 1, max = 120))]
    pub age: u32,
    #[serde(default)]
    pub has_asthma: bool,
    #[serde(default)]
    pub has_heart_disease: bool,
}

impl From<ProfileInput> for UserProfile {
    fn from(input: ProfileInput) -> Self {
        UserProfile::new(input.age)
            .with_asthma(input.has_asthma)
            .with_heart_disease(input.has_heart_disease)
    }
}

/// Live assessment: the server fetches the feeds
#[derive(Debug, Deserialize, Validate)]
pub struct AssessRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(nested)]
    pub profile: ProfileInput,
    #[serde(default)]
    pub local_health: LocalHealthData,
}

impl AssessRequest {
    pub fn into_request(self) -> Result<AssessmentRequest, LocationError> {
        Ok(AssessmentRequest {
            coordinates: Coordinates::new(self.latitude, self.longitude)?,
            profile: self.profile.into(),
            local_health: self.local_health,
        })
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct ReadingInput {
    #[validate(range(min = 0.0))]
    pub pm10: f64,
    #[validate(range(min = 0.0))]
    pub pm2_5: f64,
    #[validate(range(min = 0.0))]
    pub no2: f64,
    #[validate(range(min = 0.0))]
    pub so2: f64,
    #[validate(range(min = 0.0))]
    pub o3: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub aqi: u32,
    #[serde(default)]
    pub respiratory_cases: u32,
    #[serde(default)]
    pub cardiovascular_cases: u32,
}

impl From<ReadingInput> for EnvironmentalReading {
    fn from(input: ReadingInput) -> Self {
        EnvironmentalReading {
            pm10: input.pm10,
            pm2_5: input.pm2_5,
            no2: input.no2,
            so2: input.so2,
            o3: input.o3,
            temperature: input.temperature,
            humidity: input.humidity,
            wind_speed: input.wind_speed,
            aqi: input.aqi,
            respiratory_cases: input.respiratory_cases,
            cardiovascular_cases: input.cardiovascular_cases,
        }
    }
}

/// Offline evaluation of a caller-supplied reading
#[derive(Debug, Deserialize, Validate)]
pub struct EvaluateRequest {
    #[validate(nested)]
    pub reading: ReadingInput,
    #[validate(nested)]
    pub profile: ProfileInput,
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub assessment_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    pub assessment: Assessment,
    pub summary: AssessmentSummary,
}

impl AssessmentResponse {
    pub fn new(location: Option<Coordinates>, assessment: Assessment) -> Self {
        Self {
            assessment_id: Uuid::new_v4(),
            location,
            summary: AssessmentSummary::from_assessment(&assessment),
            assessment,
        }
    }
}
