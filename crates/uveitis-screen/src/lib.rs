//! Uveitis screening risk for children with juvenile idiopathic arthritis.
//!
//! Each supported region publishes its own screening guideline. Pick one with
//! [`GuidelineKey`] or a [`Region`] selector, collect the answers it asks for
//! in a [`PatientRecord`], and call [`evaluate`] with the date the assessment
//! is made.

pub mod config;
pub mod dates;
pub mod error;
pub mod guidelines;
pub mod telemetry;

pub use dates::{parse_date, years_days_diff, DateDifference};
pub use guidelines::{
    evaluate, evaluate_region, get_guideline, list_guidelines, regions, validate_answers,
    Guideline, GuidelineDefinition, GuidelineError, GuidelineKey, GuidelineSummary, IntakeError,
    PatientRecord, QuestionKey, Region, RiskLevel, RiskResult,
};
