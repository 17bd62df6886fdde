//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the model input schema.**
//! The health model was trained on exactly these columns, in exactly this
//! order. Reordering or renaming breaks every exported model.

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "pm10",        // 0: PM10 concentration
    "pm2_5",       // 1: PM2.5 concentration
    "no2",         // 2: Nitrogen dioxide
    "so2",         // 3: Sulphur dioxide
    "o3",          // 4: Ozone
    "temperature", // 5: Temperature (°C)
    "humidity",    // 6: Relative humidity (%)
    "wind_speed",  // 7: Wind speed (m/s)
];

/// Total number of features
/// Must match FEATURE_LAYOUT.len()
pub const FEATURE_COUNT: usize = 8;

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

/// True when `names` lists exactly the current layout, in order
pub fn matches_layout<S: AsRef<str>>(names: &[S]) -> bool {
    names.len() == FEATURE_COUNT
        && names.iter().zip(FEATURE_LAYOUT).all(|(a, b)| a.as_ref() == *b)
}
