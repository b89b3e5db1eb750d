use super::common::*;
use crate::guidelines::{GuidelineKey, RiskLevel};

#[test]
fn systemic_onset_needs_no_screening() {
    let record = patient(
        "01/01/2016",
        "01/01/2020",
        "Systemic-onset Arthritis",
        false,
    );

    assert_risk(
        &assess(GuidelineKey::Miwguc, &record),
        RiskLevel::VeryLow,
        "No screening required",
    );
}

#[test]
fn first_year_after_early_onset_screens_every_two_months() {
    let first_anniversary = patient(
        "01/01/2020",
        "15/06/2024",
        "Juvenile Idiopathic Arthritis",
        false,
    );
    let day_later = patient(
        "01/01/2020",
        "14/06/2024",
        "Juvenile Idiopathic Arthritis",
        false,
    );

    let first = assess(GuidelineKey::Miwguc, &first_anniversary);
    assert_risk(&first, RiskLevel::High, "Every 2 Months");
    assert_eq!(first.followup, "Follow-up continues into adulthood");

    assert_risk(
        &assess(GuidelineKey::Miwguc, &day_later),
        RiskLevel::High,
        "Every 3–4 Months",
    );
}

#[test]
fn late_onset_drops_to_low_after_four_years() {
    let record = patient(
        "01/01/2010",
        "01/01/2020",
        "Juvenile Idiopathic Arthritis",
        true,
    );

    assert_risk(
        &assess(GuidelineKey::Miwguc, &record),
        RiskLevel::Low,
        "Every 12 Months",
    );
}

#[test]
fn fourth_anniversary_after_early_onset_is_still_high_risk() {
    let exactly = patient(
        "01/01/2018",
        "15/06/2021",
        "Juvenile Idiopathic Arthritis",
        false,
    );
    let day_more = patient(
        "01/01/2018",
        "14/06/2021",
        "Juvenile Idiopathic Arthritis",
        false,
    );

    assert_risk(
        &assess(GuidelineKey::Miwguc, &exactly),
        RiskLevel::High,
        "Every 3–4 Months",
    );
    assert_risk(
        &assess(GuidelineKey::Miwguc, &day_more),
        RiskLevel::Medium,
        "Every 6 Months",
    );
}

#[test]
fn seventh_anniversary_after_early_onset_is_still_medium_risk() {
    let exactly = patient(
        "01/01/2014",
        "15/06/2018",
        "Juvenile Idiopathic Arthritis",
        false,
    );
    let day_more = patient(
        "01/01/2014",
        "14/06/2018",
        "Juvenile Idiopathic Arthritis",
        false,
    );

    assert_risk(
        &assess(GuidelineKey::Miwguc, &exactly),
        RiskLevel::Medium,
        "Every 6 Months",
    );
    assert_risk(
        &assess(GuidelineKey::Miwguc, &day_more),
        RiskLevel::Low,
        "Every 12 Months",
    );
}
