use super::{GuidelineError, GuidelineKey};
use serde::Serialize;

/// A selectable region and the guideline it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub value: &'static str,
    pub label: &'static str,
    pub guideline: GuidelineKey,
}

// Sorted by label.
const REGIONS: [Region; 11] = [
    Region {
        value: "argentina",
        label: "Argentina",
        guideline: GuidelineKey::Argentina,
    },
    Region {
        value: "czech",
        label: "Czech",
        guideline: GuidelineKey::CzechSlovak,
    },
    Region {
        value: "germany",
        label: "Germany",
        guideline: GuidelineKey::Germany,
    },
    Region {
        value: "miwguc",
        label: "MIWGUC - Multinational Interdisciplinary Working Group for Uveitis in Childhood",
        guideline: GuidelineKey::Miwguc,
    },
    Region {
        value: "nordic",
        label: "Nordic",
        guideline: GuidelineKey::Nordic,
    },
    Region {
        value: "pakistan",
        label: "Pakistan",
        guideline: GuidelineKey::UsPakistan,
    },
    Region {
        value: "portugal",
        label: "Portugal",
        guideline: GuidelineKey::SpainPortugal,
    },
    Region {
        value: "slovakia",
        label: "Slovakia",
        guideline: GuidelineKey::CzechSlovak,
    },
    Region {
        value: "spain",
        label: "Spain",
        guideline: GuidelineKey::SpainPortugal,
    },
    Region {
        value: "uk",
        label: "UK",
        guideline: GuidelineKey::Uk,
    },
    Region {
        value: "us",
        label: "US",
        guideline: GuidelineKey::UsPakistan,
    },
];

/// Region selector entries in display order.
pub fn regions() -> &'static [Region] {
    &REGIONS
}

impl Region {
    /// Resolves a selector value or label, ignoring case.
    pub fn from_value(value: &str) -> Result<&'static Region, GuidelineError> {
        let needle = value.trim();
        REGIONS
            .iter()
            .find(|region| {
                region.value.eq_ignore_ascii_case(needle)
                    || region.label.eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| GuidelineError::UnknownRegion(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn regions_are_sorted_by_label() {
        let labels: Vec<_> = regions().iter().map(|region| region.label).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn eleven_regions_cover_the_eight_guidelines() {
        let keys: BTreeSet<_> = regions().iter().map(|region| region.guideline).collect();
        assert_eq!(regions().len(), 11);
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn paired_regions_share_a_guideline() {
        let lookup = |value| Region::from_value(value).expect("known region").guideline;
        assert_eq!(lookup("czech"), GuidelineKey::CzechSlovak);
        assert_eq!(lookup("slovakia"), GuidelineKey::CzechSlovak);
        assert_eq!(lookup("spain"), GuidelineKey::SpainPortugal);
        assert_eq!(lookup("portugal"), GuidelineKey::SpainPortugal);
        assert_eq!(lookup("us"), GuidelineKey::UsPakistan);
        assert_eq!(lookup("pakistan"), GuidelineKey::UsPakistan);
    }

    #[test]
    fn labels_resolve_case_insensitively() {
        let region = Region::from_value("Uk").expect("label resolves");
        assert_eq!(region.value, "uk");
    }

    #[test]
    fn unknown_region_is_an_error() {
        assert_eq!(
            Region::from_value("atlantis"),
            Err(GuidelineError::UnknownRegion("atlantis".to_string()))
        );
    }
}
