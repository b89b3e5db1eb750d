//! Calendar arithmetic shared by every guideline.
//!
//! Dates arrive as `DD/MM/YYYY` text. Elapsed time is expressed as whole years
//! plus the days since the last anniversary, so thresholds such as "four years"
//! and "four years and one day" stay distinguishable across leap years.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const DAYS_PER_YEAR: f64 = 365.25;

// Earliest accepted year; 0000-0099 read as two-digit years elsewhere.
const MIN_YEAR: i32 = 100;

/// Parses a strict `DD/MM/YYYY` date.
///
/// Returns `None` for any other shape, for dates that do not exist in the
/// calendar (`31/02/2023`, `29/02/2021`, day or month `00`), and for years
/// before 0100.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return None;
    }

    let digits_only = bytes
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != 2 && *idx != 5)
        .all(|(_, byte)| byte.is_ascii_digit());
    if !digits_only {
        return None;
    }

    let day: u32 = raw[0..2].parse().ok()?;
    let month: u32 = raw[3..5].parse().ok()?;
    let year: i32 = raw[6..10].parse().ok()?;
    if year < MIN_YEAR {
        return None;
    }

    // from_ymd_opt refuses out-of-range components instead of rolling them over.
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    if date.day() == day && date.month() == month && date.year() == year {
        Some(date)
    } else {
        None
    }
}

/// Formats a date back into the `DD/MM/YYYY` wire form.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Elapsed calendar time between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateDifference {
    pub years: u32,
    pub days: u32,
}

impl DateDifference {
    /// `years < n`, comparing whole years only.
    pub const fn under(self, years: u32) -> bool {
        self.years < years
    }

    /// At most `years` exactly: `n` years and zero days still qualifies.
    pub const fn at_most(self, years: u32) -> bool {
        self.years < years || (self.years == years && self.days == 0)
    }

    /// Strictly more than `years`: `n` years and one day qualifies.
    pub const fn exceeds(self, years: u32) -> bool {
        self.years > years || (self.years == years && self.days > 0)
    }
}

impl fmt::Display for DateDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years {} days", self.years, self.days)
    }
}

/// Whole years plus remaining days between `a` and `b`, in either order.
pub fn years_days_diff(a: NaiveDate, b: NaiveDate) -> DateDifference {
    let (earlier, later) = if a > b { (b, a) } else { (a, b) };

    let mut years = later.year() - earlier.year();
    if (later.month(), later.day()) < (earlier.month(), earlier.day()) {
        years -= 1;
    }

    let days = anniversary(earlier, earlier.year() + years)
        .map_or(0, |anniversary| (later - anniversary).num_days().max(0));

    DateDifference {
        years: years.max(0) as u32,
        days: days as u32,
    }
}

/// Elapsed time as decimal years (`days / 365.25`), signed by order.
pub fn fractional_years(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}

// A 29 February birthday falls on 1 March in common years.
fn anniversary(origin: NaiveDate, year: i32) -> Option<NaiveDate> {
    origin
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}
