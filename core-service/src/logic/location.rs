//! Location input
//!
//! Coordinates for the feeds, either detected by the caller or typed in
//! by hand as `"latitude,longitude"`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("Invalid location format. Please enter as latitude,longitude")]
    Format,

    #[error("invalid {axis}: {value:?} is not a number")]
    NotANumber { axis: &'static str, value: String },

    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

/// A validated WGS84 point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self { latitude, longitude })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_location(s)
    }
}

/// Parse a manually entered `"latitude,longitude"` pair
pub fn parse_location(input: &str) -> Result<Coordinates, LocationError> {
    let mut parts = input.split(',');
    let (lat, lon) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lon), None) => (lat.trim(), lon.trim()),
        _ => return Err(LocationError::Format),
    };

    let latitude = parse_axis("latitude", lat)?;
    let longitude = parse_axis("longitude", lon)?;

    Coordinates::new(latitude, longitude)
}

fn parse_axis(axis: &'static str, value: &str) -> Result<f64, LocationError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LocationError::NotANumber {
            axis,
            value: value.to_string(),
        })
}
