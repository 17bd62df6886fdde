//! Feature Vector - model input built from a reading
//!
//! Case counts and AQI are deliberately not part of the vector;
//! the model only sees pollutant and weather measurements.

use serde::{Deserialize, Serialize};

use super::layout::{feature_index, FEATURE_COUNT};
use crate::logic::risk::EnvironmentalReading;

/// Feature values in the order defined by FEATURE_LAYOUT
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Extract the model features from a reading
    pub fn from_reading(reading: &EnvironmentalReading) -> Self {
        Self::from_values([
            reading.pm10 as f32,
            reading.pm2_5 as f32,
            reading.no2 as f32,
            reading.so2 as f32,
            reading.o3 as f32,
            reading.temperature as f32,
            reading.humidity as f32,
            reading.wind_speed as f32,
        ])
    }

    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).and_then(|i| self.get(i))
    }
}

impl From<&EnvironmentalReading> for FeatureVector {
    fn from(reading: &EnvironmentalReading) -> Self {
        Self::from_reading(reading)
    }
}
