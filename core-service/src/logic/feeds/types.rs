//! Feed Types
//!
//! Wire formats of the OpenWeather current-weather and air-pollution
//! endpoints, plus the normalized observations built from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::risk::{EnvironmentalReading, LocalHealthData};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("OPENWEATHER_API_KEY is not configured")]
    NotConfigured,

    #[error("network error: {0}")]
    Network(String),

    #[error("{feed} feed returned HTTP {status}")]
    Status { feed: &'static str, status: u16 },

    #[error("{feed} feed returned malformed data: {message}")]
    Parse { feed: &'static str, message: String },

    #[error("{feed} feed response is missing {field}")]
    MissingField { feed: &'static str, field: &'static str },
}

pub const WEATHER_FEED: &str = "weather";
pub const AIR_POLLUTION_FEED: &str = "air pollution";

// ============================================================================
// WEATHER API RESPONSE
// ============================================================================

/// `GET /weather` response (fields we use)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub main: Option<WeatherMain>,
    #[serde(default)]
    pub wind: Option<WeatherWind>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherMain {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherWind {
    pub speed: Option<f64>,
}

// ============================================================================
// AIR POLLUTION API RESPONSE
// ============================================================================

/// `GET /air_pollution` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirPollutionResponse {
    #[serde(default)]
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionEntry {
    pub main: Option<AirQualityMain>,
    #[serde(default)]
    pub components: PollutantComponents,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityMain {
    pub aqi: Option<u32>,
}

/// Concentrations in µg/m³. Any of them may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollutantComponents {
    pub pm10: Option<f64>,
    pub pm2_5: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub o3: Option<f64>,
}

// ============================================================================
// NORMALIZED OBSERVATIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirObservation {
    pub pm10: f64,
    pub pm2_5: f64,
    pub no2: f64,
    pub so2: f64,
    pub o3: f64,
    pub aqi: u32,
}

/// Both feeds for one location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub weather: WeatherObservation,
    pub air: AirObservation,
}

impl Conditions {
    /// Combine with user-entered case counts into the engine's input
    pub fn into_reading(self, local: LocalHealthData) -> EnvironmentalReading {
        EnvironmentalReading {
            pm10: self.air.pm10,
            pm2_5: self.air.pm2_5,
            no2: self.air.no2,
            so2: self.air.so2,
            o3: self.air.o3,
            temperature: self.weather.temperature,
            humidity: self.weather.humidity,
            wind_speed: self.weather.wind_speed,
            aqi: self.air.aqi,
            ..Default::default()
        }
        .with_local_health(local)
    }
}

// ============================================================================
// PARSING
// ============================================================================

impl WeatherResponse {
    /// Temperature, humidity and wind are all required
    pub fn into_observation(self) -> Result<WeatherObservation, FeedError> {
        let missing = |field| FeedError::MissingField {
            feed: WEATHER_FEED,
            field,
        };

        let main = self.main.ok_or_else(|| missing("main"))?;
        let wind = self.wind.ok_or_else(|| missing("wind"))?;

        Ok(WeatherObservation {
            temperature: main.temp.ok_or_else(|| missing("main.temp"))?,
            humidity: main.humidity.ok_or_else(|| missing("main.humidity"))?,
            wind_speed: wind.speed.ok_or_else(|| missing("wind.speed"))?,
        })
    }
}

impl AirPollutionResponse {
    /// Uses the first entry. Missing pollutant components become 0;
    /// a missing AQI is an error.
    pub fn into_observation(self) -> Result<AirObservation, FeedError> {
        let missing = |field| FeedError::MissingField {
            feed: AIR_POLLUTION_FEED,
            field,
        };

        let entry = self.list.into_iter().next().ok_or_else(|| missing("list[0]"))?;
        let aqi = entry
            .main
            .and_then(|m| m.aqi)
            .ok_or_else(|| missing("list[0].main.aqi"))?;
        let c = entry.components;

        Ok(AirObservation {
            pm10: c.pm10.unwrap_or(0.0),
            pm2_5: c.pm2_5.unwrap_or(0.0),
            no2: c.no2.unwrap_or(0.0),
            so2: c.so2.unwrap_or(0.0),
            o3: c.o3.unwrap_or(0.0),
            aqi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEATHER_JSON: &str = r#"{
        "coord": {"lon": 77.209, "lat": 28.6139},
        "weather": [{"id": 721, "main": "Haze"}],
        "main": {"temp": 31.05, "feels_like": 33.2, "pressure": 1004, "humidity": 48},
        "wind": {"speed": 2.57, "deg": 290},
        "name": "New Delhi"
    }"#;

    const AIR_JSON: &str = r#"{
        "coord": {"lon": 77.209, "lat": 28.6139},
        "list": [{
            "main": {"aqi": 5},
            "components": {"co": 1321.9, "no": 2.4, "no2": 41.13, "o3": 72.96,
                           "so2": 16.45, "pm2_5": 127.3, "pm10": 178.4, "nh3": 12.2},
            "dt": 1717000000
        }]
    }"#;

    #[test]
    fn test_parse_weather() {
        let response: WeatherResponse = serde_json::from_str(WEATHER_JSON).unwrap();
        let weather = response.into_observation().unwrap();
        assert_eq!(weather.temperature, 31.05);
        assert_eq!(weather.humidity, 48.0);
        assert_eq!(weather.wind_speed, 2.57);
    }

    #[test]
    fn test_parse_air_pollution() {
        let response: AirPollutionResponse = serde_json::from_str(AIR_JSON).unwrap();
        let air = response.into_observation().unwrap();
        assert_eq!(air.aqi, 5);
        assert_eq!(air.pm2_5, 127.3);
        assert_eq!(air.pm10, 178.4);
        assert_eq!(air.no2, 41.13);
        assert_eq!(air.so2, 16.45);
        assert_eq!(air.o3, 72.96);
    }

    #[test]
    fn test_missing_components_default_to_zero() {
        let json = r#"{"list": [{"main": {"aqi": 2}, "components": {"pm2_5": 12.5}}]}"#;
        let air = serde_json::from_str::<AirPollutionResponse>(json)
            .unwrap()
            .into_observation()
            .unwrap();
        assert_eq!(air.pm2_5, 12.5);
        assert_eq!(air.pm10, 0.0);
        assert_eq!(air.no2, 0.0);
        assert_eq!(air.o3, 0.0);

        let json = r#"{"list": [{"main": {"aqi": 1}}]}"#;
        let air = serde_json::from_str::<AirPollutionResponse>(json)
            .unwrap()
            .into_observation()
            .unwrap();
        assert_eq!(air.so2, 0.0);
    }

    #[test]
    fn test_empty_pollution_list_is_error() {
        let response: AirPollutionResponse = serde_json::from_str(r#"{"list": []}"#).unwrap();
        assert_eq!(
            response.into_observation(),
            Err(FeedError::MissingField {
                feed: AIR_POLLUTION_FEED,
                field: "list[0]"
            })
        );
    }

    #[test]
    fn test_missing_aqi_is_error() {
        let json = r#"{"list": [{"components": {"pm10": 10.0}}]}"#;
        let response: AirPollutionResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response.into_observation(),
            Err(FeedError::MissingField { field: "list[0].main.aqi", .. })
        ));
    }

    #[test]
    fn test_missing_weather_fields_are_errors() {
        let response: WeatherResponse =
            serde_json::from_str(r#"{"main": {"temp": 20.0, "humidity": 50}}"#).unwrap();
        assert!(matches!(
            response.into_observation(),
            Err(FeedError::MissingField { field: "wind", .. })
        ));

        let response: WeatherResponse =
            serde_json::from_str(r#"{"main": {"humidity": 50}, "wind": {"speed": 1.0}}"#).unwrap();
        assert!(matches!(
            response.into_observation(),
            Err(FeedError::MissingField { field: "main.temp", .. })
        ));
    }

    #[test]
    fn test_conditions_into_reading() {
        let conditions = Conditions {
            weather: WeatherObservation {
                temperature: 35.0,
                humidity: 60.0,
                wind_speed: 1.5,
            },
            air: AirObservation {
                pm10: 150.0,
                pm2_5: 120.0,
                no2: 90.0,
                so2: 40.0,
                o3: 50.0,
                aqi: 4,
            },
        };

        let reading = conditions.into_reading(LocalHealthData::new(10, 7));
        assert_eq!(reading.pm2_5, 120.0);
        assert_eq!(reading.wind_speed, 1.5);
        assert_eq!(reading.aqi, 4);
        assert_eq!(reading.respiratory_cases, 10);
        assert_eq!(reading.cardiovascular_cases, 7);
    }
}
