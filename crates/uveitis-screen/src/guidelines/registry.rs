use super::argentina::ArgentinaGuideline;
use super::czech_slovak::CzechSlovakGuideline;
use super::germany::GermanyGuideline;
use super::miwguc::MiwgucGuideline;
use super::nordic::NordicGuideline;
use super::spain_portugal::SpainPortugalGuideline;
use super::uk::UkGuideline;
use super::us_pakistan::UsPakistanGuideline;
use super::{Guideline, GuidelineKey};

/// Looks up the decision table for `key`.
///
/// The key set is closed, so every key resolves; callers holding free text
/// go through [`GuidelineKey::from_str`](std::str::FromStr) or
/// [`Region::from_value`](super::Region::from_value) first.
pub fn get_guideline(key: GuidelineKey) -> &'static dyn Guideline {
    match key {
        GuidelineKey::Uk => &UkGuideline,
        GuidelineKey::Nordic => &NordicGuideline,
        GuidelineKey::UsPakistan => &UsPakistanGuideline,
        GuidelineKey::Germany => &GermanyGuideline,
        GuidelineKey::SpainPortugal => &SpainPortugalGuideline,
        GuidelineKey::CzechSlovak => &CzechSlovakGuideline,
        GuidelineKey::Argentina => &ArgentinaGuideline,
        GuidelineKey::Miwguc => &MiwgucGuideline,
    }
}
