//! Assessment Module - orchestration around the risk engine
//!
//! ## Structure
//! - `types`: Request, result and error types
//! - `pipeline`: `Assessor` (feeds + model + engine) and `evaluate_reading`
//! - `report`: Display text for the three outputs

pub mod types;
pub mod pipeline;
pub mod report;


pub use types::{Assessment, AssessmentError, AssessmentRequest, MlPrediction};
pub use pipeline::{evaluate_reading, Assessor};
pub use report::{render_text, AssessmentSummary};
