use super::domain::{GuidelineKey, PatientRecord, QuestionKey, RiskLevel, RiskResult, Timeline};
use super::{Guideline, GuidelineDefinition};

const MAX_AGE: u32 = 21;
const SYSTEMIC: &str = "Systemic onset Arthritis";
const FOLLOWUP: &str = "Until 21 years";

pub(super) static DEFINITION: GuidelineDefinition = GuidelineDefinition {
    key: GuidelineKey::Argentina,
    name: "Argentina Guidelines",
    questions: &[
        QuestionKey::DateOfBirth,
        QuestionKey::DateOfDiagnosis,
        QuestionKey::SubDiagnosis,
        QuestionKey::AnaPositive,
    ],
    sub_diagnosis_options: &[
        "Persistent Oligoarthritis",
        "Extended Oligoarthritis",
        "RF Negative Polyarthritis",
        "Psoriatic Arthritis",
        "RF Positive Arthritis",
        "Enthesitis related Arthritis",
        "Systemic onset Arthritis",
    ],
    biological_treatment_options: None,
    max_age: Some(MAX_AGE),
};

/// Every non-systemic sub-type shares one ladder.
pub(super) struct ArgentinaGuideline;

impl Guideline for ArgentinaGuideline {
    fn definition(&self) -> &'static GuidelineDefinition {
        &DEFINITION
    }

    fn assess(&self, patient: &PatientRecord, timeline: &Timeline) -> RiskResult {
        if timeline.current_age.exceeds(MAX_AGE) {
            return RiskResult::new(
                RiskLevel::VeryLow,
                "No screening required",
                "None",
                "Very low risk due to age > 21 years.",
            );
        }

        if patient.sub_diagnosis == SYSTEMIC {
            return RiskResult::new(
                RiskLevel::Low,
                "Every 12 Months",
                FOLLOWUP,
                "Low risk due to diagnosis of Systemic onset Arthritis.",
            );
        }

        let since = timeline.time_since_diagnosis;
        let ana = patient.ana_positive;

        let rung = if timeline.age_at_onset.at_most(6) {
            if ana && since.at_most(4) {
                Some((
                    RiskLevel::High,
                    "Every 3 Months",
                    "High risk due to positive ANA, onset age ≤ 6, and time since diagnosis ≤ 4 years.",
                ))
            } else if ana && since.at_most(7) {
                Some((
                    RiskLevel::Medium,
                    "Every 6 Months",
                    "Medium risk due to positive ANA, onset age ≤ 6, and time since diagnosis between 4 and 7 years.",
                ))
            } else if ana {
                Some((
                    RiskLevel::Low,
                    "Every 12 Months",
                    "Low risk due to positive ANA, onset age ≤ 6, and time since diagnosis > 7 years.",
                ))
            } else if since.at_most(4) {
                Some((
                    RiskLevel::Medium,
                    "Every 6 Months",
                    "Medium risk due to negative ANA, onset age ≤ 6, and time since diagnosis ≤ 4 years.",
                ))
            } else {
                Some((
                    RiskLevel::Low,
                    "Every 12 Months",
                    "Low risk due to negative ANA, onset age ≤ 6, and time since diagnosis > 4 years.",
                ))
            }
        } else if ana && since.at_most(4) {
            Some((
                RiskLevel::Medium,
                "Every 6 Months",
                "Medium risk due to positive ANA, onset age > 6, and time since diagnosis ≤ 4 years.",
            ))
        } else if since.exceeds(4) {
            let justification = if ana {
                "Low risk due to positive ANA, onset age > 6, and time since diagnosis > 4 years."
            } else {
                "Low risk due to negative ANA, onset age > 6, and time since diagnosis > 4 years."
            };
            Some((RiskLevel::Low, "Every 12 Months", justification))
        } else {
            // ANA negative, late onset, diagnosed within four years: the
            // guideline gives no rung for this combination.
            None
        };

        match rung {
            Some((risk_level, recommendation, justification)) => {
                RiskResult::new(risk_level, recommendation, FOLLOWUP, justification)
            }
            None => RiskResult::new(RiskLevel::NoRisk, "", FOLLOWUP, ""),
        }
    }
}
