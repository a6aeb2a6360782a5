//! Calendar engine
//!
//! Month lookup, leap-year rule and days-in-month table backing
//! [`CalendarDate`](super::CalendarDate).

use std::fmt;

/// Month of the year, named by its Portuguese three-letter abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan = 1,
    Fev,
    Mar,
    Abr,
    Mai,
    Jun,
    Jul,
    Ago,
    Set,
    Out,
    Nov,
    Dez,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Fev,
        Month::Mar,
        Month::Abr,
        Month::Mai,
        Month::Jun,
        Month::Jul,
        Month::Ago,
        Month::Set,
        Month::Out,
        Month::Nov,
        Month::Dez,
    ];

    /// Look up a month by its abbreviation, ignoring ASCII case
    pub fn from_abbreviation(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.abbreviation().eq_ignore_ascii_case(s))
    }

    /// Month for a 1-based number
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Uppercase three-letter abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Fev => "FEV",
            Month::Mar => "MAR",
            Month::Abr => "ABR",
            Month::Mai => "MAI",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Ago => "AGO",
            Month::Set => "SET",
            Month::Out => "OUT",
            Month::Nov => "NOV",
            Month::Dez => "DEZ",
        }
    }

    /// 1-based month number
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(month: Month, year: u16) -> u8 {
    match month {
        Month::Fev => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        Month::Abr | Month::Jun | Month::Set | Month::Nov => 30,
        _ => 31,
    }
}
