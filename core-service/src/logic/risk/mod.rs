//! Risk Module
//!
//! Turns an environmental reading (plus an optional user profile) into risk labels.
//! Both evaluators are pure: no I/O, no shared state, safe to call from any thread.
//!
//! ## Structure
//! - `types`: Reading, profile and output types
//! - `rules`: Thresholds and constants
//! - `classifier`: Population verdict (first match wins)
//! - `annotator`: Personalized warnings (all checks, tags accumulate)
//!
//! ## Usage
//! ```
//! use airwise_core::logic::risk::{annotate, classify, EnvironmentalReading, RiskVerdict, UserProfile};
//!
//! let reading = EnvironmentalReading { pm2_5: 120.0, respiratory_cases: 8, ..Default::default() };
//! assert_eq!(classify(&reading), RiskVerdict::HighRiskAsthma);
//!
//! let profile = UserProfile::new(40).with_asthma(true);
//! assert!(!annotate(&reading, &profile).is_safe());
//! ```

pub mod types;
pub mod rules;
pub mod classifier;
pub mod annotator;


pub use types::{
    EnvironmentalReading,
    InvalidInput,
    LocalHealthData,
    PersonalizedWarnings,
    RiskVerdict,
    UserProfile,
    WarningTag,
};

pub use rules::{PersonalThresholds, VerdictThresholds};

pub use classifier::{classify, classify_with_thresholds};
pub use annotator::{annotate, annotate_with_thresholds};
