//! Features Module - model input schema
//!
//! Maps an `EnvironmentalReading` onto the fixed-order vector the health
//! model was trained on.

pub mod layout;
pub mod vector;

pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::FeatureVector;
