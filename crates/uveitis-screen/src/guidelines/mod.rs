//! Regional uveitis screening guidelines.
//!
//! Every guideline is its own decision table implementing [`Guideline`]. The
//! shared date precondition lives in [`Guideline::evaluate`]; the tables only
//! see records whose dates already parsed.

mod argentina;
mod czech_slovak;
pub mod domain;
mod germany;
pub mod intake;
mod miwguc;
mod nordic;
pub mod region;
mod registry;
mod spain_portugal;
mod uk;
mod us_pakistan;

#[cfg(test)]
mod tests;

pub use domain::{GuidelineKey, PatientRecord, QuestionKey, RiskLevel, RiskResult, Timeline};
pub use intake::{validate_answers, IntakeError};
pub use region::{regions, Region};
pub use registry::get_guideline;

use crate::dates::parse_date;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Static description of a guideline: what it asks and which answers it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineDefinition {
    pub key: GuidelineKey,
    pub name: &'static str,
    pub questions: &'static [QuestionKey],
    pub sub_diagnosis_options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biological_treatment_options: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
}

impl GuidelineDefinition {
    pub fn asks(&self, question: QuestionKey) -> bool {
        self.questions.contains(&question)
    }
}

/// One regional decision table.
pub trait Guideline: Send + Sync {
    fn definition(&self) -> &'static GuidelineDefinition;

    /// Applies the table to a record whose dates have been parsed.
    fn assess(&self, patient: &PatientRecord, timeline: &Timeline) -> RiskResult;

    fn evaluate(&self, patient: &PatientRecord, today: NaiveDate) -> RiskResult {
        let dates = (
            parse_date(&patient.date_of_birth),
            parse_date(&patient.date_of_diagnosis),
        );
        let (Some(date_of_birth), Some(date_of_diagnosis)) = dates else {
            return RiskResult::invalid_date();
        };

        self.assess(
            patient,
            &Timeline::new(date_of_birth, date_of_diagnosis, today),
        )
    }
}

/// Entry for a guideline selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineSummary {
    pub key: GuidelineKey,
    pub display_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuidelineError {
    #[error("unknown guideline key '{0}'")]
    UnknownGuideline(String),
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
}

pub fn list_guidelines() -> Vec<GuidelineSummary> {
    GuidelineKey::ordered()
        .into_iter()
        .map(|key| GuidelineSummary {
            key,
            display_name: get_guideline(key).definition().name,
        })
        .collect()
}

/// Evaluates `patient` against the guideline registered under `key`, as of `today`.
pub fn evaluate(key: GuidelineKey, patient: &PatientRecord, today: NaiveDate) -> RiskResult {
    let result = get_guideline(key).evaluate(patient, today);
    debug!(
        guideline = %key,
        risk_level = %result.risk_level,
        sub_diagnosis = %patient.sub_diagnosis,
        "guideline evaluated"
    );
    result
}

/// Evaluates using a region selector value such as `"slovakia"` or `"us"`.
pub fn evaluate_region(
    region: &str,
    patient: &PatientRecord,
    today: NaiveDate,
) -> Result<RiskResult, GuidelineError> {
    let region = Region::from_value(region)?;
    Ok(evaluate(region.guideline, patient, today))
}
