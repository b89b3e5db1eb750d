use super::domain::{GuidelineKey, PatientRecord, QuestionKey, RiskLevel, RiskResult, Timeline};
use super::{Guideline, GuidelineDefinition};

const MAX_AGE: u32 = 16;

const OLIGO_AND_POLY: &[&str] = &[
    "Oligoarthritis",
    "RF Negative Polyarthritis",
    "Psoriatic Arthritis",
    "Undifferentiated Arthritis",
];
const ENTHESITIS: &str = "Enthesitis related Arthritis";
const SYSTEMIC_AND_RF_POSITIVE: &[&str] = &["RF Positive Arthritis", "Systemic Onset Arthritis"];

/// Biologicals that do not lower the computed risk.
const NON_PROTECTIVE_TREATMENTS: [&str; 2] = ["None / Other", "Etanercept"];

const EVERY_3_MONTHS: &str = "Every 3 Months";
const EVERY_6_MONTHS: &str = "Every 6 Months";
const EVERY_12_MONTHS: &str = "Every 12 Months";

pub(super) static DEFINITION: GuidelineDefinition = GuidelineDefinition {
    key: GuidelineKey::Nordic,
    name: "Nordic Guidelines",
    questions: &[
        QuestionKey::DateOfBirth,
        QuestionKey::DateOfDiagnosis,
        QuestionKey::SubDiagnosis,
        QuestionKey::AnaPositive,
        QuestionKey::OnMethotrexate,
        QuestionKey::BiologicalTreatment,
    ],
    sub_diagnosis_options: &[
        "Oligoarthritis",
        "RF Negative Polyarthritis",
        "Psoriatic Arthritis",
        "RF Positive Arthritis",
        "Enthesitis related Arthritis",
        "Systemic Onset Arthritis",
        "Undifferentiated Arthritis",
    ],
    biological_treatment_options: Some(&[
        "Adalimumab",
        "Certolizumab",
        "Golimumab",
        "Infliximab",
        "Etanercept",
        "None / Other",
    ]),
    max_age: Some(MAX_AGE),
};

pub(super) struct NordicGuideline;

impl Guideline for NordicGuideline {
    fn definition(&self) -> &'static GuidelineDefinition {
        &DEFINITION
    }

    fn assess(&self, patient: &PatientRecord, timeline: &Timeline) -> RiskResult {
        if timeline.current_age.exceeds(MAX_AGE) {
            return RiskResult::new(
                RiskLevel::VeryLow,
                "No screening required",
                "None",
                "Screening guidelines apply only until 16 years of age.",
            );
        }

        let mut result = base_risk(patient, timeline);
        if on_protective_biological(patient) {
            downgrade(&mut result);
        }
        result
    }
}

fn base_risk(patient: &PatientRecord, timeline: &Timeline) -> RiskResult {
    let onset_early = timeline.age_at_onset.at_most(6);

    if patient.sub_diagnosis_in(OLIGO_AND_POLY) {
        let followup = if onset_early {
            "Follow-up continues until 16 Years of age"
        } else {
            "Follow-up for 2 - 4 years, max 16 years of age"
        };
        let rung = if onset_early {
            early_onset_rung(patient, timeline)
        } else {
            late_onset_rung(patient, timeline)
        };
        let (risk_level, recommendation, justification) = rung.unwrap_or(NO_RUNG);
        return RiskResult::new(risk_level, recommendation, followup, justification);
    }

    if patient.sub_diagnosis == ENTHESITIS {
        return if onset_early {
            RiskResult::new(
                RiskLevel::Low,
                EVERY_12_MONTHS,
                "Follow-up for 4 - 7 years, max 16 years of age",
                "Low risk: Enthesitis related arthritis with onset ≤ 6 years.",
            )
        } else {
            RiskResult::new(
                RiskLevel::Low,
                EVERY_12_MONTHS,
                "Follow-up for 2 - 4 years, max 16 years of age",
                "Low risk: Enthesitis related arthritis with onset > 6 years.",
            )
        };
    }

    if patient.sub_diagnosis_in(SYSTEMIC_AND_RF_POSITIVE) {
        return RiskResult::new(
            RiskLevel::VeryLow,
            "Screen at Diagnosis",
            "No Follow up required",
            "Very low risk: RF positive or systemic onset arthritis.",
        );
    }

    RiskResult::new(
        RiskLevel::NoRisk,
        "None",
        "None",
        "Standard risk calculation applied.",
    )
}

type Rung = (RiskLevel, &'static str, &'static str);

const NO_RUNG: Rung = (
    RiskLevel::NoRisk,
    "None",
    "Standard risk calculation applied.",
);

fn early_onset_rung(patient: &PatientRecord, timeline: &Timeline) -> Option<Rung> {
    let since = timeline.time_since_diagnosis;
    let ana = patient.ana_positive;
    let mtx = patient.on_methotrexate;

    if ana && !mtx && since.at_most(4) {
        Some((
            RiskLevel::High,
            EVERY_3_MONTHS,
            "High risk due to ANA+ without methotrexate, age at onset ≤ 6 years, time since diagnosis 0–4 years.",
        ))
    } else if ana && mtx && since.at_most(4) {
        Some((
            RiskLevel::Medium,
            EVERY_6_MONTHS,
            "Medium risk due to ANA+ with methotrexate, age at onset ≤ 6 years, time since diagnosis 0–4 years.",
        ))
    } else if ana && !mtx && since.exceeds(4) && !since.exceeds(7) {
        Some((
            RiskLevel::Medium,
            EVERY_6_MONTHS,
            "Medium risk due to ANA+ without methotrexate, age at onset ≤ 6 years, time since diagnosis 4–7 years.",
        ))
    } else if ana && mtx && since.exceeds(4) {
        Some((
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA+ with methotrexate, age at onset ≤ 6 years, time since diagnosis >4 years.",
        ))
    } else if ana && !mtx && since.exceeds(7) {
        Some((
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA+ without methotrexate, age at onset ≤ 6 years, time since diagnosis >7 years.",
        ))
    } else if !ana && !mtx && since.at_most(4) {
        Some((
            RiskLevel::Medium,
            EVERY_6_MONTHS,
            "Medium risk due to ANA- without methotrexate, age at onset ≤ 6 years, time since diagnosis 0–4 years.",
        ))
    } else if !ana && !mtx && since.exceeds(4) {
        Some((
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA- without methotrexate, age at onset ≤ 6 years, time since diagnosis > 4 years.",
        ))
    } else if !ana && mtx && since.exceeds(0) {
        Some((
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA- with methotrexate, age at onset ≤ 6 years",
        ))
    } else {
        None
    }
}

fn late_onset_rung(patient: &PatientRecord, timeline: &Timeline) -> Option<Rung> {
    let since = timeline.time_since_diagnosis;
    let ana = patient.ana_positive;
    let mtx = patient.on_methotrexate;

    if ana && !mtx && since.at_most(2) {
        Some((
            RiskLevel::Medium,
            EVERY_6_MONTHS,
            "Medium risk due to ANA+ without methotrexate, age at onset > 6 years, time since diagnosis ≤ 2 years.",
        ))
    } else if ana && !mtx && since.exceeds(2) {
        Some((
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA+ without methotrexate, onset > 6 years, time since diagnosis > 2 years.",
        ))
    } else if ana && mtx && since.exceeds(0) {
        Some((
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA+ with methotrexate, onset > 6 years.",
        ))
    } else if !ana {
        Some((
            RiskLevel::Low,
            EVERY_12_MONTHS,
            "Low risk due to ANA- regardless of methotrexate, onset > 6 years.",
        ))
    } else {
        None
    }
}

fn on_protective_biological(patient: &PatientRecord) -> bool {
    patient
        .biological_treatment
        .as_deref()
        .map(str::trim)
        .is_some_and(|treatment| {
            !treatment.is_empty() && !NON_PROTECTIVE_TREATMENTS.contains(&treatment)
        })
}

/// Lowers High and Medium by one step; other levels are left alone.
fn downgrade(result: &mut RiskResult) {
    let (level, recommendation) = match result.risk_level {
        RiskLevel::High => (RiskLevel::Medium, EVERY_6_MONTHS),
        RiskLevel::Medium => (RiskLevel::Low, EVERY_12_MONTHS),
        _ => return,
    };
    result.risk_level = level;
    result.recommendation = recommendation.to_string();
    result.justification = "Risk downgraded due to biological treatment.".to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treated_with(treatment: Option<&str>) -> PatientRecord {
        PatientRecord {
            biological_treatment: treatment.map(str::to_string),
            ..PatientRecord::default()
        }
    }

    #[test]
    fn etanercept_and_none_do_not_protect() {
        for treatment in [None, Some(""), Some("Etanercept"), Some("None / Other")] {
            assert!(!on_protective_biological(&treated_with(treatment)));
        }
        assert!(on_protective_biological(&treated_with(Some("Infliximab"))));
    }

    #[test]
    fn downgrade_leaves_low_levels_untouched() {
        let mut result = RiskResult::new(RiskLevel::Low, EVERY_12_MONTHS, "x", "y");
        downgrade(&mut result);
        assert_eq!(
            result,
            RiskResult::new(RiskLevel::Low, EVERY_12_MONTHS, "x", "y")
        );
    }
}
