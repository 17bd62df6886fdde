//! Configuration module

use std::env;
use std::path::PathBuf;

use airwise_core::constants;
use airwise_core::logic::feeds::FeedConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// OpenWeather feed settings
    pub feed: FeedConfig,

    /// ONNX health model, if any
    pub model_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            feed: FeedConfig::default(),

            model_path: constants::get_model_path(),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
