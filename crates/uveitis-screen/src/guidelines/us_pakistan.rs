use super::domain::{GuidelineKey, PatientRecord, QuestionKey, RiskLevel, RiskResult, Timeline};
use super::{Guideline, GuidelineDefinition};

const OLIGO_AND_POLY: &[&str] = &[
    "Extended Oligoarthritis",
    "Persistent Oligoarthritis",
    "RF Negative Polyarthritis",
    "Psoriatic Arthritis",
    "Undifferentiated Arthritis",
];
const LOW_RISK_SUBTYPES: &[&str] = &[
    "Enthesitis related Arthritis",
    "RF Positive Arthritis",
    "Systemic onset Arthritis",
];

const FOLLOWUP: &str = "Follow-up continues into adulthood";

pub(super) static DEFINITION: GuidelineDefinition = GuidelineDefinition {
    key: GuidelineKey::UsPakistan,
    name: "US and Pakistan Guidelines",
    questions: &[
        QuestionKey::DateOfBirth,
        QuestionKey::DateOfDiagnosis,
        QuestionKey::SubDiagnosis,
        QuestionKey::AnaPositive,
    ],
    sub_diagnosis_options: &[
        "Extended Oligoarthritis",
        "Persistent Oligoarthritis",
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

/// Shared by the US and Pakistan regions. Follow-up always continues into
/// adulthood; there is no age cut-off.
pub(super) struct UsPakistanGuideline;

impl Guideline for UsPakistanGuideline {
    fn definition(&self) -> &'static GuidelineDefinition {
        &DEFINITION
    }

    fn assess(&self, patient: &PatientRecord, timeline: &Timeline) -> RiskResult {
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
            "No screening required",
            FOLLOWUP,
            "Standard risk calculation applied.",
        )
    }
}

type Rung = (RiskLevel, &'static str, &'static str);

fn ladder(patient: &PatientRecord, timeline: &Timeline) -> Rung {
    let since = timeline.time_since_diagnosis;
    let ana = patient.ana_positive;

    // Whole years: 6 years 364 days still counts as onset before 7.
    if timeline.age_at_onset.under(7) {
        if ana && since.at_most(4) {
            (
                RiskLevel::High,
                "Every 3 Months",
                "High risk due to positive ANA, age at onset < 7, time since diagnosis ≤ 4 years.",
            )
        } else if ana && since.exceeds(4) && since.at_most(7) {
            (
                RiskLevel::Medium,
                "Every 6 Months",
                "Medium risk due to positive ANA, age at onset < 7, time since diagnosis between 4 and 7 years.",
            )
        } else if ana && since.exceeds(7) {
            (
                RiskLevel::Low,
                "Every 12 Months",
                "Low risk due to positive ANA, age at onset < 7, time since diagnosis > 7 years.",
            )
        } else if !ana && since.at_most(4) {
            (
                RiskLevel::Medium,
                "Every 6 Months",
                "Medium risk due to negative ANA, age at onset < 7, time since diagnosis ≤ 4 years.",
            )
        } else {
            (
                RiskLevel::Low,
                "Every 12 Months",
                "Low risk due to negative ANA, age at onset < 7, time since diagnosis > 4 years.",
            )
        }
    } else if ana && since.at_most(4) {
        (
            RiskLevel::Medium,
            "Every 6 Months",
            "Medium risk due to positive ANA, age at onset ≥ 7, time since diagnosis ≤ 4 years.",
        )
    } else if ana {
        (
            RiskLevel::Low,
            "Every 12 Months",
            "Low risk due to positive ANA, age at onset ≥ 7, time since diagnosis > 4 years.",
        )
    } else {
        (
            RiskLevel::Low,
            "Every 12 Months",
            "Low risk due to negative ANA and age at onset > 7.",
        )
    }
}
