use super::domain::{GuidelineKey, PatientRecord, QuestionKey, RiskLevel, RiskResult, Timeline};
use super::{Guideline, GuidelineDefinition};

const OLIGO_AND_ENTHESITIS: &[&str] = &[
    "Persistent Oligoarthritis",
    "Extended Oligoarthritis",
    "Psoriatic Arthritis",
    "Enthesitis-related Arthritis",
];
const RF_NEGATIVE: &str = "RF Negative Polyarthritis";
const SYSTEMIC_AND_RF_POSITIVE: &[&str] =
    &["Systemic Onset Arthritis", "RF Positive Polyarthritis"];

const HIGH_RISK_INTERVAL: &str = "Every 3 - 4 Months";

/// Recommendations that are not intervals and never get the induction prefix.
const SENTINEL_RECOMMENDATIONS: [&str; 3] =
    ["Screen at Diagnosis", "No screening required", "None"];

pub(super) static DEFINITION: GuidelineDefinition = GuidelineDefinition {
    key: GuidelineKey::Uk,
    name: "United Kingdom Guidelines",
    questions: &[
        QuestionKey::DateOfBirth,
        QuestionKey::DateOfDiagnosis,
        QuestionKey::SubDiagnosis,
        QuestionKey::AnaPositive,
    ],
    sub_diagnosis_options: &[
        "Persistent Oligoarthritis",
        "Extended Oligoarthritis",
        "Psoriatic Arthritis",
        "Enthesitis-related Arthritis",
        "RF Negative Polyarthritis",
        "Systemic Onset Arthritis",
        "RF Positive Polyarthritis",
    ],
    biological_treatment_options: None,
    max_age: None,
};

#[derive(Debug, Clone, Copy)]
enum UkGroup {
    OligoAndEnthesitis,
    RfNegative,
    SystemicAndRfPositive,
}

impl UkGroup {
    fn of(patient: &PatientRecord) -> Option<Self> {
        if patient.sub_diagnosis_in(OLIGO_AND_ENTHESITIS) {
            Some(Self::OligoAndEnthesitis)
        } else if patient.sub_diagnosis == RF_NEGATIVE {
            Some(Self::RfNegative)
        } else if patient.sub_diagnosis_in(SYSTEMIC_AND_RF_POSITIVE) {
            Some(Self::SystemicAndRfPositive)
        } else {
            None
        }
    }
}

/// UK thresholds are stated in decimal years, so this table compares
/// `days / 365.25` rather than exact anniversaries.
pub(super) struct UkGuideline;

impl Guideline for UkGuideline {
    fn definition(&self) -> &'static GuidelineDefinition {
        &DEFINITION
    }

    fn assess(&self, patient: &PatientRecord, timeline: &Timeline) -> RiskResult {
        let onset = timeline.onset_years();
        let since = timeline.years_since_diagnosis();
        let group = UkGroup::of(patient);

        if let Some(group) = group {
            if screening_window_elapsed(group, patient.ana_positive, onset, since) {
                return RiskResult::new(
                    RiskLevel::VeryLow,
                    "No screening required",
                    "None",
                    "Very low risk due to long time since diagnosis.",
                );
            }
        }

        let mut result = RiskResult::new(RiskLevel::NoRisk, "None", "None", "None");
        match group {
            Some(UkGroup::OligoAndEnthesitis) => {
                result.risk_level = RiskLevel::High;
                result.recommendation = HIGH_RISK_INTERVAL.to_string();
                let band = if onset < 3.0 {
                    Some(("8 years", "High risk due to onset age <3 years."))
                } else if onset < 5.0 {
                    Some((
                        "6 years",
                        "High risk due to onset age between 3 and 4 years.",
                    ))
                } else if onset < 9.0 {
                    Some((
                        "3 years",
                        "High risk due to onset age between 5 and 8 years.",
                    ))
                } else if onset < 12.0 {
                    Some((
                        "1 year",
                        "High risk due to onset age between 9 and 11 years.",
                    ))
                } else {
                    None
                };
                if let Some((span, justification)) = band {
                    result.followup = format!("Follow up continues for {span}");
                    result.justification = justification.to_string();
                }
            }
            Some(UkGroup::RfNegative) => {
                result.risk_level = RiskLevel::High;
                result.recommendation = HIGH_RISK_INTERVAL.to_string();
                let (span, justification) = if patient.ana_positive {
                    if onset < 6.0 {
                        (
                            "5 years",
                            "High risk due to onset age <6 years with positive ANA.",
                        )
                    } else if onset <= 9.0 {
                        (
                            "2 years",
                            "High risk due to onset age between 6 and 9 years with positive ANA.",
                        )
                    } else {
                        ("1 year", "High risk due to onset age >9 with positive ANA.")
                    }
                } else if onset < 7.0 {
                    (
                        "5 years",
                        "High risk due to early onset age with negative ANA.",
                    )
                } else {
                    (
                        "1 year",
                        "High risk due to onset age at or after 7 years with negative ANA.",
                    )
                };
                result.followup = format!("Follow up continues for {span}");
                result.justification = justification.to_string();
            }
            Some(UkGroup::SystemicAndRfPositive) => {
                let band = if onset < 7.0 {
                    Some(("5 years", "High risk due to onset age <7 years."))
                } else if onset <= 16.0 {
                    Some((
                        "1 year",
                        "High risk due to onset age between 7 and 16 years.",
                    ))
                } else {
                    None
                };
                if let Some((span, justification)) = band {
                    result.risk_level = RiskLevel::High;
                    result.recommendation = HIGH_RISK_INTERVAL.to_string();
                    result.followup = format!("Follow up continues for {span}");
                    result.justification = justification.to_string();
                }
            }
            None => {}
        }

        result.recommendation = with_induction_phase(&result.recommendation);
        result
    }
}

/// Very-low-risk override: the onset-specific follow-up window has passed.
fn screening_window_elapsed(group: UkGroup, ana_positive: bool, onset: f64, since: f64) -> bool {
    match group {
        UkGroup::OligoAndEnthesitis => {
            (onset < 3.0 && since > 8.0)
                || ((3.0..5.0).contains(&onset) && since > 6.0)
                || ((5.0..9.0).contains(&onset) && since > 3.0)
                || (onset >= 9.0 && since > 1.0)
        }
        UkGroup::RfNegative if ana_positive => {
            (onset < 6.0 && since > 5.0)
                || ((6.0..=9.0).contains(&onset) && since > 2.0)
                || (onset > 9.0 && since > 1.0)
        }
        UkGroup::RfNegative | UkGroup::SystemicAndRfPositive => {
            (onset < 7.0 && since > 5.0) || (onset >= 7.0 && since > 1.0)
        }
    }
}

fn with_induction_phase(recommendation: &str) -> String {
    if SENTINEL_RECOMMENDATIONS.contains(&recommendation) {
        recommendation.to_string()
    } else {
        format!("Screen for every 2 months, for the first 6 months. Then screen {recommendation}")
    }
}
