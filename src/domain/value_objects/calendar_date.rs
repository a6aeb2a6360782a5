//! Calendar Date Value Object
//!
//! A day/month/year triple restricted to the years 2000–2999, with a total
//! order used by booking conflict detection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::calendar::{days_in_month, Month};
use super::validation::{Domain, Rule, ValidationError, ValidationResult};

/// A validated calendar date
///
/// Textual form is `DD-MMM-YYYY`, e.g. `10-JAN-2025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    day: u8,
    month: Month,
    year: u16,
}

impl CalendarDate {
    pub const MIN_YEAR: u16 = 2000;
    pub const MAX_YEAR: u16 = 2999;

    /// Build a date from a day, a three-letter month abbreviation and a year
    pub fn new(day: u8, month: &str, year: u16) -> ValidationResult<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(invalid(Rule::Range, "year must be between 2000 and 2999"));
        }

        let month = Month::from_abbreviation(month).ok_or_else(|| {
            invalid(
                Rule::Format,
                "month must be a three-letter abbreviation (JAN, FEV, ..., DEZ)",
            )
        })?;

        Self::from_parts(day, month, year)
    }

    /// Build a date from an already resolved [`Month`]
    pub fn from_parts(day: u8, month: Month, year: u16) -> ValidationResult<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(invalid(Rule::Range, "year must be between 2000 and 2999"));
        }
        if day < 1 || day > days_in_month(month, year) {
            return Err(invalid(
                Rule::Range,
                "day is out of range for the given month and year",
            ));
        }

        Ok(Self { day, month, year })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// Comparable key `year*10000 + month*100 + day`
    pub fn sort_key(&self) -> u32 {
        u32::from(self.year) * 10_000 + u32::from(self.month.number()) * 100 + u32::from(self.day)
    }
}

fn invalid(rule: Rule, reason: &'static str) -> ValidationError {
    ValidationError::new(Domain::CalendarDate, rule, reason)
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}-{}", self.day, self.month, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    /// Parse `DD-MMM-YYYY`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let layout = || invalid(Rule::Format, "date must be written as DD-MMM-YYYY");

        let mut parts = s.trim().split('-');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(layout());
        };

        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(day) || !all_digits(year) {
            return Err(layout());
        }

        let day: u8 = day.parse().map_err(|_| layout())?;
        let year: u16 = year.parse().map_err(|_| layout())?;
        Self::new(day, month, year)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
