//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults.
//! Every value can be overridden through the environment.

use std::path::PathBuf;

/// OpenWeather REST API base
pub const DEFAULT_OPENWEATHER_URL: &str = "http://api.openweathermap.org/data/2.5";

/// Feed request timeout (seconds)
pub const DEFAULT_FEED_TIMEOUT: u64 = 10;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "AirWise";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Feed base URL from environment or default
pub fn get_openweather_url() -> String {
    std::env::var("OPENWEATHER_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_OPENWEATHER_URL.to_string())
}

/// OpenWeather API key, if configured
pub fn get_openweather_api_key() -> Option<String> {
    std::env::var("OPENWEATHER_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
}

/// Feed timeout from environment or default
pub fn get_feed_timeout() -> u64 {
    std::env::var("AIRWISE_FEED_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FEED_TIMEOUT)
}

/// Path of the ONNX health model, if configured
pub fn get_model_path() -> Option<PathBuf> {
    std::env::var("AIRWISE_MODEL_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}
