//! Feeds Module - live weather and air pollution data
//!
//! # Components
//! - `types.rs`: API response formats, observations, `FeedError`
//! - `client.rs`: OpenWeather HTTP client

pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::logic::location::Coordinates;

pub use client::{FeedConfig, OpenWeatherClient};
pub use types::{AirObservation, Conditions, FeedError, WeatherObservation};

/// Source of current conditions for a location
#[async_trait]
pub trait ConditionsSource: Send + Sync {
    async fn fetch(&self, coords: Coordinates) -> Result<Conditions, FeedError>;
}

/// Stand-in used when no API key is configured; every fetch fails
pub struct NotConfiguredSource;

#[async_trait]
impl ConditionsSource for NotConfiguredSource {
    async fn fetch(&self, _coords: Coordinates) -> Result<Conditions, FeedError> {
        Err(FeedError::NotConfigured)
    }
}
