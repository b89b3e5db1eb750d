use chrono::NaiveDate;
use serde_json::json;
use uveitis_screen::{
    evaluate, get_guideline, list_guidelines, regions, validate_answers, years_days_diff,
    DateDifference, GuidelineKey, PatientRecord, QuestionKey, Region, RiskLevel,
};

fn assessment_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid assessment date")
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn year_day_differences_respect_anniversaries() {
    assert_eq!(
        years_days_diff(ymd(2020, 1, 1), ymd(2024, 1, 1)),
        DateDifference { years: 4, days: 0 }
    );
    assert_eq!(
        years_days_diff(ymd(2020, 1, 1), ymd(2024, 1, 2)),
        DateDifference { years: 4, days: 1 }
    );
    assert_eq!(
        years_days_diff(ymd(2020, 2, 29), ymd(2021, 2, 28)),
        DateDifference {
            years: 0,
            days: 365,
        }
    );
    assert_eq!(
        years_days_diff(ymd(2024, 1, 2), ymd(2020, 1, 1)),
        years_days_diff(ymd(2020, 1, 1), ymd(2024, 1, 2))
    );
}

#[test]
fn json_record_flows_through_intake_and_evaluation() {
    let record: PatientRecord = serde_json::from_value(json!({
        "dateOfBirth": "01/01/2018",
        "dateOfDiagnosis": "01/01/2022",
        "subDiagnosis": "Oligoarthritis",
        "anaPositive": true,
        "onMethotrexate": false,
        "biologicalTreatment": "Adalimumab"
    }))
    .expect("record deserializes");

    let region = Region::from_value("nordic").expect("nordic region");
    let definition = get_guideline(region.guideline).definition();
    validate_answers(definition, &record, assessment_date()).expect("answers complete");

    let result = evaluate(region.guideline, &record, assessment_date());
    let body = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(body["riskLevel"], "Medium Risk");
    assert_eq!(body["recommendation"], "Every 6 Months");
    assert_eq!(
        body["followup"],
        "Follow-up continues until 16 Years of age"
    );
    assert_eq!(
        body["justification"],
        "Risk downgraded due to biological treatment."
    );
}

#[test]
fn missing_optional_answers_default_to_negative() {
    let record: PatientRecord = serde_json::from_value(json!({
        "dateOfBirth": "01/01/2020",
        "dateOfDiagnosis": "01/01/2024",
        "subDiagnosis": "Juvenile Idiopathic Arthritis"
    }))
    .expect("record deserializes");

    assert!(!record.ana_positive);
    assert!(!record.on_methotrexate);
    assert_eq!(record.biological_treatment, None);
    assert_eq!(
        record.display_answer(QuestionKey::BiologicalTreatment),
        "N/A"
    );

    let result = evaluate(GuidelineKey::Miwguc, &record, assessment_date());
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn error_results_serialize_with_the_error_label() {
    let record = PatientRecord {
        date_of_birth: "31/02/2020".to_string(),
        date_of_diagnosis: "01/01/2022".to_string(),
        sub_diagnosis: "Persistent Oligoarthritis".to_string(),
        ..PatientRecord::default()
    };

    let result = evaluate(GuidelineKey::Germany, &record, assessment_date());
    let body = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(
        body,
        json!({
            "riskLevel": "Error",
            "recommendation": "Invalid date format",
            "followup": "",
            "justification": ""
        })
    );
}

#[test]
fn catalogue_exposes_eight_guidelines_behind_eleven_regions() {
    let guidelines = list_guidelines();
    assert_eq!(guidelines.len(), 8);
    assert_eq!(regions().len(), 11);

    for region in regions() {
        assert!(guidelines
            .iter()
            .any(|summary| summary.key == region.guideline));
    }

    let nordic = get_guideline(GuidelineKey::Nordic).definition();
    assert_eq!(nordic.max_age, Some(16));
    assert!(nordic.asks(QuestionKey::OnMethotrexate));
    let options = nordic
        .biological_treatment_options
        .expect("nordic lists biologicals");
    assert!(options.contains(&"None / Other"));

    let miwguc = get_guideline(GuidelineKey::Miwguc).definition();
    assert!(!miwguc.asks(QuestionKey::AnaPositive));
}
