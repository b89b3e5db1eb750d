use crate::dates::{fractional_years, years_days_diff, DateDifference};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::GuidelineError;

/// Identifies one of the eight guideline decision tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidelineKey {
    Uk,
    Nordic,
    UsPakistan,
    Germany,
    SpainPortugal,
    CzechSlovak,
    Argentina,
    Miwguc,
}

impl GuidelineKey {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Uk,
            Self::Nordic,
            Self::UsPakistan,
            Self::Germany,
            Self::SpainPortugal,
            Self::CzechSlovak,
            Self::Argentina,
            Self::Miwguc,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uk => "uk",
            Self::Nordic => "nordic",
            Self::UsPakistan => "us_pakistan",
            Self::Germany => "germany",
            Self::SpainPortugal => "spain_portugal",
            Self::CzechSlovak => "czech_slovak",
            Self::Argentina => "argentina",
            Self::Miwguc => "miwguc",
        }
    }
}

impl fmt::Display for GuidelineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuidelineKey {
    type Err = GuidelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str() == needle)
            .ok_or_else(|| GuidelineError::UnknownGuideline(value.to_string()))
    }
}

/// A field of the patient record that a guideline may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKey {
    DateOfBirth,
    DateOfDiagnosis,
    SubDiagnosis,
    AnaPositive,
    OnMethotrexate,
    BiologicalTreatment,
}

impl QuestionKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DateOfBirth => "Patient's Date of Birth",
            Self::DateOfDiagnosis => "Date of Diagnosis of Arthritis",
            Self::SubDiagnosis => "Sub-diagnosis of Arthritis",
            Self::AnaPositive => "Antinuclear Antibody (ANA)",
            Self::OnMethotrexate => "On Methotrexate",
            Self::BiologicalTreatment => "Biological Treatment",
        }
    }
}

/// Answers collected for a single patient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub date_of_birth: String,
    pub date_of_diagnosis: String,
    #[serde(default)]
    pub sub_diagnosis: String,
    #[serde(default)]
    pub ana_positive: bool,
    #[serde(default)]
    pub on_methotrexate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biological_treatment: Option<String>,
}

impl PatientRecord {
    /// Display value for one answer, as shown in an input summary.
    pub fn display_answer(&self, question: QuestionKey) -> String {
        fn text_or_na(value: &str) -> String {
            if value.trim().is_empty() {
                "N/A".to_string()
            } else {
                value.to_string()
            }
        }
        fn yes_no(value: bool) -> String {
            let answer = if value { "Yes" } else { "No" };
            answer.to_string()
        }

        match question {
            QuestionKey::DateOfBirth => text_or_na(&self.date_of_birth),
            QuestionKey::DateOfDiagnosis => text_or_na(&self.date_of_diagnosis),
            QuestionKey::SubDiagnosis => text_or_na(&self.sub_diagnosis),
            QuestionKey::AnaPositive => yes_no(self.ana_positive),
            QuestionKey::OnMethotrexate => yes_no(self.on_methotrexate),
            QuestionKey::BiologicalTreatment => {
                text_or_na(self.biological_treatment.as_deref().unwrap_or_default())
            }
        }
    }

    pub(crate) fn sub_diagnosis_in(&self, group: &[&str]) -> bool {
        group.contains(&self.sub_diagnosis.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "Low to Medium Risk")]
    LowToMedium,
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Very Low Risk")]
    VeryLow,
    #[serde(rename = "No Risk")]
    NoRisk,
    #[serde(rename = "Error")]
    Error,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
            Self::LowToMedium => "Low to Medium Risk",
            Self::Low => "Low Risk",
            Self::VeryLow => "Very Low Risk",
            Self::NoRisk => "No Risk",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one guideline evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub risk_level: RiskLevel,
    pub recommendation: String,
    pub followup: String,
    pub justification: String,
}

impl RiskResult {
    pub fn new(
        risk_level: RiskLevel,
        recommendation: impl Into<String>,
        followup: impl Into<String>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            risk_level,
            recommendation: recommendation.into(),
            followup: followup.into(),
            justification: justification.into(),
        }
    }

    pub fn invalid_date() -> Self {
        Self::new(RiskLevel::Error, "Invalid date format", "", "")
    }

    pub fn is_error(&self) -> bool {
        self.risk_level == RiskLevel::Error
    }
}

/// Parsed dates and the elapsed spans derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub date_of_birth: NaiveDate,
    pub date_of_diagnosis: NaiveDate,
    pub today: NaiveDate,
    pub age_at_onset: DateDifference,
    pub time_since_diagnosis: DateDifference,
    pub current_age: DateDifference,
}

impl Timeline {
    pub fn new(date_of_birth: NaiveDate, date_of_diagnosis: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date_of_birth,
            date_of_diagnosis,
            today,
            age_at_onset: years_days_diff(date_of_birth, date_of_diagnosis),
            time_since_diagnosis: years_days_diff(date_of_diagnosis, today),
            current_age: years_days_diff(date_of_birth, today),
        }
    }

    pub fn onset_years(&self) -> f64 {
        fractional_years(self.date_of_birth, self.date_of_diagnosis)
    }

    pub fn years_since_diagnosis(&self) -> f64 {
        fractional_years(self.date_of_diagnosis, self.today)
    }
}
