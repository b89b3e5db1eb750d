use super::domain::{GuidelineKey, PatientRecord, QuestionKey, RiskLevel, RiskResult, Timeline};
use super::{Guideline, GuidelineDefinition};

const OLIGO_AND_POLY: &[&str] = &[
    "Persistent Oligoarthritis",
    "Extended Oligoarthritis",
    "RF Negative Polyarthritis",
    "Psoriatic Arthritis",
    "Undifferentiated Arthritis",
];
const LOW_RISK_SUBTYPES: &[&str] = &[
    "Enthesitis related Arthritis",
    "RF Positive Arthritis",
    "Systemic onset Arthritis",
];

/// Screening stops this many years after diagnosis.
const SCREENING_YEARS: u32 = 7;
const FOLLOWUP: &str = "Follow-up continues for 7 years from diagnosis";

pub(super) static DEFINITION: GuidelineDefinition = GuidelineDefinition {
    key: GuidelineKey::Germany,
    name: "German Guidelines",
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
        "Undifferentiated Arthritis",
    ],
    biological_treatment_options: None,
    max_age: None,
};

pub(super) struct GermanyGuideline;

impl Guideline for GermanyGuideline {
    fn definition(&self) -> &'static GuidelineDefinition {
        &DEFINITION
    }

    fn assess(&self, patient: &PatientRecord, timeline: &Timeline) -> RiskResult {
        if timeline.time_since_diagnosis.exceeds(SCREENING_YEARS) {
            return RiskResult::new(
                RiskLevel::VeryLow,
                "None",
                "No screening required",
                "Very low risk due to time since diagnosis > 7 years.",
            );
        }

        if patient.sub_diagnosis_in(OLIGO_AND_POLY) {
            let (level, recommendation, justification) = ladder(patient, timeline);
            return RiskResult::new(level, recommendation, FOLLOWUP, justification);
        }

        if patient.sub_diagnosis_in(LOW_RISK_SUBTYPES) {
            return RiskResult::new(
                RiskLevel::Low,
                "Every 12 Months",
                FOLLOWUP,
                format!("Low risk due to diagnosis of {}.", patient.sub_diagnosis),
            );
        }

        RiskResult::new(
            RiskLevel::NoRisk,
            "None",
            "No screening required",
            "Standard risk calculation applied.",
        )
    }
}

type Rung = (RiskLevel, &'static str, &'static str);

fn ladder(patient: &PatientRecord, timeline: &Timeline) -> Rung {
    let since = timeline.time_since_diagnosis;
    let ana = patient.ana_positive;

    if timeline.age_at_onset.at_most(6) {
        if ana && since.at_most(4) {
            (
                RiskLevel::High,
                "Every 3 Months",
                "High risk due to positive ANA, onset age ≤ 6, and time since diagnosis ≤ 4 years.",
            )
        } else if ana {
            (
                RiskLevel::Medium,
                "Every 6 Months",
                "Medium risk due to positive ANA, onset age ≤ 6, and time since diagnosis > 4 years.",
            )
        } else if since.at_most(4) {
            (
                RiskLevel::Medium,
                "Every 6 Months",
                "Medium risk due to negative ANA, onset age ≤ 6, and time since diagnosis ≤ 4 years.",
            )
        } else {
            (
                RiskLevel::Low,
                "Every 12 Months",
                "Low risk due to negative ANA, onset age ≤ 6, and time since diagnosis > 4 years.",
            )
        }
    } else if ana && since.at_most(2) {
        (
            RiskLevel::Medium,
            "Every 6 Months",
            "Medium risk due to positive ANA, onset age > 6, and time since diagnosis ≤ 2 years.",
        )
    } else if ana {
        (
            RiskLevel::Low,
            "Every 12 Months",
            "Low risk due to positive ANA, onset age > 6, and time since diagnosis > 2 years.",
        )
    } else {
        (
            RiskLevel::Low,
            "Every 12 Months",
            "Low risk due to negative ANA and onset age > 6.",
        )
    }
}
