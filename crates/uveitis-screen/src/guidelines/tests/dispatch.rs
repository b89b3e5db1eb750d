use super::common::*;
use crate::guidelines::{
    evaluate_region, list_guidelines, regions, GuidelineError, GuidelineKey, RiskLevel, RiskResult,
};
use std::collections::BTreeSet;

#[test]
fn invalid_birth_date_is_an_error_result_for_every_guideline() {
    for key in GuidelineKey::ordered() {
        let record = patient(
            "31/02/2020",
            "01/03/2021",
            "Persistent Oligoarthritis",
            true,
        );
        let result = assess(key, &record);
        assert_eq!(result, RiskResult::invalid_date(), "{key}");
        assert_eq!(result.recommendation, "Invalid date format");
        assert!(result.followup.is_empty());
        assert!(result.justification.is_empty());
    }
}

#[test]
fn invalid_diagnosis_date_is_an_error_result() {
    let record = patient("01/03/2015", "2021-03-01", "Oligoarthritis", true);
    assert!(assess(GuidelineKey::Nordic, &record).is_error());
}

#[test]
fn lists_exactly_eight_guidelines_in_registry_order() {
    let listed = list_guidelines();
    let keys: Vec<_> = listed.iter().map(|summary| summary.key).collect();
    assert_eq!(keys, GuidelineKey::ordered().to_vec());
    assert_eq!(listed[0].display_name, "United Kingdom Guidelines");
    assert_eq!(listed[7].display_name, "MIWGUC Guidelines");
}

#[test]
fn every_region_dispatches_to_a_listed_guideline() {
    let listed: BTreeSet<_> = list_guidelines().into_iter().map(|summary| summary.key).collect();
    let record = patient(
        "01/01/2016",
        "01/01/2020",
        "Persistent Oligoarthritis",
        true,
    );

    for region in regions() {
        assert!(listed.contains(&region.guideline), "{}", region.value);
        let result = evaluate_region(region.value, &record, today()).expect("region resolves");
        assert_ne!(result.risk_level, RiskLevel::Error, "{}", region.value);
    }
}

#[test]
fn paired_regions_give_identical_results() {
    let record = patient(
        "10/10/2017",
        "05/05/2021",
        "Persistent Oligoarthritis",
        true,
    );
    for (left, right) in [("czech", "slovakia"), ("spain", "portugal"), ("us", "pakistan")] {
        let left = evaluate_region(left, &record, today()).expect("left resolves");
        let right = evaluate_region(right, &record, today()).expect("right resolves");
        assert_eq!(left, right);
    }
}

#[test]
fn unknown_region_is_rejected() {
    let record = patient(
        "10/10/2017",
        "05/05/2021",
        "Persistent Oligoarthritis",
        true,
    );
    assert_eq!(
        evaluate_region("mars", &record, today()),
        Err(GuidelineError::UnknownRegion("mars".to_string()))
    );
}

#[test]
fn guideline_keys_parse_from_text() {
    assert_eq!(
        "czech_slovak".parse::<GuidelineKey>(),
        Ok(GuidelineKey::CzechSlovak)
    );
    assert_eq!(" UK ".parse::<GuidelineKey>(), Ok(GuidelineKey::Uk));
    assert_eq!(
        "czech".parse::<GuidelineKey>(),
        Err(GuidelineError::UnknownGuideline("czech".to_string()))
    );
}
