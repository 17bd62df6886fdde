//! AirWise Core
//!
//! Air-quality health risk engine: a fixed-threshold verdict, personalized
//! warnings and an optional ML label for live weather and pollution data.

pub mod constants;
pub mod logic;

pub use logic::assessment::{Assessment, AssessmentError, AssessmentRequest, Assessor};
pub use logic::risk::{
    annotate, classify, EnvironmentalReading, LocalHealthData, PersonalizedWarnings, RiskVerdict,
    UserProfile, WarningTag,
};
