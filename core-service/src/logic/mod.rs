//! Logic Module - Business Logic & Engines
//!
//! - `risk/` - Threshold verdict and personalized warnings (pure)
//! - `features/` - Model input schema
//! - `model/` - Health model inference (ONNX)
//! - `feeds/` - Weather and air pollution feeds
//! - `location` - Coordinate parsing and validation
//! - `assessment/` - Pipeline tying the above together

pub mod risk;
pub mod features;
pub mod model;
pub mod feeds;
pub mod location;
pub mod assessment;
