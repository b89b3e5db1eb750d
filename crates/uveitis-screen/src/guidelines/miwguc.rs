use super::domain::{GuidelineKey, PatientRecord, QuestionKey, RiskLevel, RiskResult, Timeline};
use super::{Guideline, GuidelineDefinition};

const JIA: &str = "Juvenile Idiopathic Arthritis";
const SYSTEMIC: &str = "Systemic-onset Arthritis";

pub(super) static DEFINITION: GuidelineDefinition = GuidelineDefinition {
    key: GuidelineKey::Miwguc,
    name: "MIWGUC Guidelines",
    questions: &[
        QuestionKey::DateOfBirth,
        QuestionKey::DateOfDiagnosis,
        QuestionKey::SubDiagnosis,
    ],
    sub_diagnosis_options: &[JIA, SYSTEMIC],
    biological_treatment_options: None,
    max_age: None,
};

/// Multinational Interdisciplinary Working Group for Uveitis in Childhood.
/// Does not ask for ANA status.
pub(super) struct MiwgucGuideline;

impl Guideline for MiwgucGuideline {
    fn definition(&self) -> &'static GuidelineDefinition {
        &DEFINITION
    }

    fn assess(&self, patient: &PatientRecord, timeline: &Timeline) -> RiskResult {
        if patient.sub_diagnosis == SYSTEMIC {
            return RiskResult::new(
                RiskLevel::VeryLow,
                "No screening required",
                "None",
                "Very low risk due to diagnosis of Systemic-onset Arthritis.",
            );
        }
        if patient.sub_diagnosis != JIA {
            return RiskResult::new(RiskLevel::NoRisk, "No screening required", "None", "None");
        }

        let since = timeline.time_since_diagnosis;
        let (risk_level, recommendation, justification) = if timeline.age_at_onset.under(7) {
            if since.at_most(1) {
                (
                    RiskLevel::High,
                    "Every 2 Months",
                    "High risk due to JIA diagnosed before 7 years of age and within the last year.",
                )
            } else if since.at_most(4) {
                (
                    RiskLevel::High,
                    "Every 3–4 Months",
                    "High risk due to JIA diagnosed before 7 years of age and within 4 years.",
                )
            } else if since.at_most(7) {
                (
                    RiskLevel::Medium,
                    "Every 6 Months",
                    "Medium risk due to JIA diagnosed before 7 years of age and within 7 years.",
                )
            } else {
                (
                    RiskLevel::Low,
                    "Every 12 Months",
                    "Low risk due to JIA diagnosed before 7 years of age and over 7 years ago.",
                )
            }
        } else if since.at_most(1) {
            (
                RiskLevel::High,
                "Every 3–4 Months",
                "High risk due to JIA diagnosed at or after 7 years of age and within the last year.",
            )
        } else if since.at_most(4) {
            (
                RiskLevel::Medium,
                "Every 6 Months",
                "Medium risk due to JIA diagnosed at or after 7 years of age and within 4 years.",
            )
        } else {
            (
                RiskLevel::Low,
                "Every 12 Months",
                "Low risk due to JIA diagnosed at or after 7 years of age and over 4 years ago",
            )
        };

        RiskResult::new(
            risk_level,
            recommendation,
            "Follow-up continues into adulthood",
            justification,
        )
    }
}
