use chrono::NaiveDate;

use crate::guidelines::{evaluate, GuidelineKey, PatientRecord, RiskLevel, RiskResult};

/// Reference date every scenario is evaluated against.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid reference date")
}

pub(super) fn patient(
    date_of_birth: &str,
    date_of_diagnosis: &str,
    sub_diagnosis: &str,
    ana_positive: bool,
) -> PatientRecord {
    PatientRecord {
        date_of_birth: date_of_birth.to_string(),
        date_of_diagnosis: date_of_diagnosis.to_string(),
        sub_diagnosis: sub_diagnosis.to_string(),
        ana_positive,
        on_methotrexate: false,
        biological_treatment: None,
    }
}

pub(super) fn assess(key: GuidelineKey, patient: &PatientRecord) -> RiskResult {
    evaluate(key, patient, today())
}

pub(super) fn assert_risk(result: &RiskResult, level: RiskLevel, recommendation: &str) {
    assert_eq!(
        result.risk_level, level,
        "unexpected risk level in {result:?}"
    );
    assert_eq!(
        result.recommendation, recommendation,
        "unexpected recommendation in {result:?}"
    );
}
