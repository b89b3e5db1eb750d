use super::domain::{GuidelineKey, PatientRecord, QuestionKey, RiskLevel, RiskResult, Timeline};
use super::{Guideline, GuidelineDefinition};

const MAX_AGE: u32 = 18;

/// Days after diagnosis covered by the two-monthly induction schedule.
const INDUCTION_DAYS: u32 = 183;

const SCREENED_SUBTYPES: &[&str] = &[
    "Persistent Oligoarthritis",
    "Extended Oligoarthritis",
    "Psoriatic Arthritis",
    "RF Negative Polyarthritis",
    "HLAB27+ Arthritis",
];
const RF_POSITIVE: &str = "RF Positive Polyarthritis";
const SYSTEMIC: &str = "Systemic Onset Arthritis";

pub(super) static DEFINITION: GuidelineDefinition = GuidelineDefinition {
    key: GuidelineKey::CzechSlovak,
    name: "Czech and Slovak Guidelines",
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
        "RF Positive Polyarthritis",
        "Systemic Onset Arthritis",
        "HLAB27+ Arthritis",
    ],
    biological_treatment_options: None,
    max_age: Some(MAX_AGE),
};

/// Shared by the Czech and Slovakia regions.
///
/// RF-positive and systemic disease are screened regardless of age; the age
/// cut-off applies only to ANA-negative patients, and ANA-positive adults
/// continue on a relaxed schedule.
pub(super) struct CzechSlovakGuideline;

impl Guideline for CzechSlovakGuideline {
    fn definition(&self) -> &'static GuidelineDefinition {
        &DEFINITION
    }

    fn assess(&self, patient: &PatientRecord, timeline: &Timeline) -> RiskResult {
        if patient.sub_diagnosis == RF_POSITIVE {
            return RiskResult::new(
                RiskLevel::Medium,
                "Every 6 months",
                "Until 18 years of age",
                "Medium risk due to diagnosis of RF Positive Polyarthritis.",
            );
        }
        if patient.sub_diagnosis == SYSTEMIC {
            return RiskResult::new(
                RiskLevel::Medium,
                "Screen at diagnosis, then every 6 months until 18 years of age",
                "",
                "Medium risk due to diagnosis of Systemic Onset Arthritis.",
            );
        }

        let adult = timeline.current_age.exceeds(MAX_AGE);
        let ana = patient.ana_positive;
        if adult && !ana {
            return RiskResult::new(
                RiskLevel::VeryLow,
                "No screening required",
                "None",
                "Very low risk due to age > 18 years and negative ANA.",
            );
        }

        if !patient.sub_diagnosis_in(SCREENED_SUBTYPES) {
            return RiskResult::new(RiskLevel::NoRisk, "", "", "");
        }

        let since = timeline.time_since_diagnosis;
        let in_induction = since.years == 0 && since.days < INDUCTION_DAYS;

        if timeline.age_at_onset.at_most(6) || ana {
            if adult {
                // ANA-positive adults, whatever the time since diagnosis.
                return RiskResult::new(
                    RiskLevel::LowToMedium,
                    "Every 6-12 months",
                    "Continue into adulthood",
                    "Low to medium risk due to age > 18 and positive ANA.",
                );
            }
            return if in_induction {
                RiskResult::new(
                    RiskLevel::High,
                    "Every 2 months",
                    "Continue into adulthood",
                    "High risk due to onset age < 6 or positive ANA, and time since diagnosis < 0.5 years.",
                )
            } else if since.at_most(4) {
                RiskResult::new(
                    RiskLevel::High,
                    "Every 3 months",
                    "Continue into adulthood",
                    "High risk due to onset age < 6 or positive ANA, and time since diagnosis ≤ 4 years.",
                )
            } else {
                RiskResult::new(
                    RiskLevel::Medium,
                    "Every 6 months",
                    "Continue into adulthood",
                    "Medium risk due to onset age < 6 or positive ANA, time since diagnosis >4 years.",
                )
            };
        }

        if since.at_most(4) {
            RiskResult::new(
                RiskLevel::High,
                "Every 3 months",
                "Until 18 years of age",
                "High risk due to negative ANA, onset age > 6, and time since diagnosis ≤ 4 years.",
            )
        } else {
            RiskResult::new(
                RiskLevel::Medium,
                "Every 6 months",
                "Until 18 years of age",
                "Medium risk due to negative ANA, onset age > 6, and time since diagnosis > 4 years.",
            )
        }
    }
}
