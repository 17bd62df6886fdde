//! OpenWeather API Client
//!
//! Fetches current weather and air pollution for a coordinate pair.
//! Both requests run concurrently; either one failing fails the fetch.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::types::{
    AirPollutionResponse, Conditions, FeedError, WeatherResponse, AIR_POLLUTION_FEED, WEATHER_FEED,
};
use super::ConditionsSource;
use crate::logic::location::Coordinates;

/// Feed configuration
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    /// Honour `HTTP_PROXY` / `HTTPS_PROXY` from the environment
    pub use_system_proxy: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        use crate::constants;

        Self {
            base_url: constants::get_openweather_url(),
            api_key: constants::get_openweather_api_key(),
            timeout_seconds: constants::get_feed_timeout(),
            use_system_proxy: true,
        }
    }
}

impl FeedConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Connect directly, ignoring proxy settings
    pub fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}

/// OpenWeather client
pub struct OpenWeatherClient {
    config: FeedConfig,
    api_key: String,
    http_client: reqwest::Client,
}

impl OpenWeatherClient {
    /// Create new client. Fails when no API key is configured.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let api_key = config.api_key.clone().ok_or(FeedError::NotConfigured)?;

        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_seconds));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let http_client = builder
            .build()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        Ok(Self {
            config,
            api_key,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// `GET /weather` in metric units
    pub async fn fetch_weather(&self, coords: Coordinates) -> Result<WeatherResponse, FeedError> {
        let url = format!("{}/weather", self.base_url());
        let query = [
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ];
        self.get_json(WEATHER_FEED, &url, &query).await
    }

    /// `GET /air_pollution`
    pub async fn fetch_air_pollution(&self, coords: Coordinates) -> Result<AirPollutionResponse, FeedError> {
        let url = format!("{}/air_pollution", self.base_url());
        let query = [
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
            ("appid", self.api_key.clone()),
        ];
        self.get_json(AIR_POLLUTION_FEED, &url, &query).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        feed: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FeedError> {
        log::debug!("Requesting {} feed: {}", feed, url);

        let response = self
            .http_client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} feed returned {}", feed, status);
            return Err(FeedError::Status {
                feed,
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| FeedError::Parse {
            feed,
            message: e.without_url().to_string(),
        })
    }
}

#[async_trait]
impl ConditionsSource for OpenWeatherClient {
    async fn fetch(&self, coords: Coordinates) -> Result<Conditions, FeedError> {
        let (weather, air) = tokio::try_join!(
            self.fetch_weather(coords),
            self.fetch_air_pollution(coords)
        )?;

        let conditions = Conditions {
            weather: weather.into_observation()?,
            air: air.into_observation()?,
        };

        log::info!(
            "Conditions at {}: AQI {}, PM2.5 {:.1}, {:.1}°C",
            coords,
            conditions.air.aqi,
            conditions.air.pm2_5,
            conditions.weather.temperature
        );

        Ok(conditions)
    }
}
