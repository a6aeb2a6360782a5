//! Money Value Object
//!
//! Monetary amounts are kept as integer cents. The textual form uses `.` as
//! the thousands separator and `,` before exactly two cent digits
//! (`1.234,56`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

/// A validated amount between 0,01 and 1.000.000,00
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u32);

impl Money {
    /// Smallest accepted amount, in cents
    pub const MIN_CENTS: u32 = 1;
    /// Largest accepted amount, in cents
    pub const MAX_CENTS: u32 = 100_000_000;

    /// Parse the textual form
    pub fn new(input: &str) -> ValidationResult<Self> {
        let (units, cents) = input
            .split_once(',')
            .ok_or_else(|| invalid(Rule::Format, "a comma must separate the cents"))?;

        if cents.contains(',') {
            return Err(invalid(Rule::Format, "only one comma is allowed"));
        }
        if cents.len() != 2 {
            return Err(invalid(Rule::Format, "cents must have exactly two digits"));
        }
        if !cents.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(Rule::Charset, "cents must be digits"));
        }
        if units.is_empty() {
            return Err(invalid(Rule::Format, "the integer part is empty"));
        }

        let groups: Vec<&str> = units.split('.').collect();
        for (i, group) in groups.iter().enumerate() {
            if !group.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(
                    Rule::Charset,
                    "the integer part may only contain digits and '.'",
                ));
            }
            if groups.len() > 1 {
                let width_ok = if i == 0 {
                    (1..=3).contains(&group.len())
                } else {
                    group.len() == 3
                };
                if !width_ok {
                    return Err(invalid(
                        Rule::Sequence,
                        "thousands separators must split groups of three digits",
                    ));
                }
            }
        }

        let mut total: u64 = 0;
        for b in groups.iter().flat_map(|g| g.bytes()).chain(cents.bytes()) {
            total = total
                .checked_mul(10)
                .and_then(|t| t.checked_add(u64::from(b - b'0')))
                .ok_or_else(out_of_range)?;
        }

        Self::from_cents(total)
    }

    /// Build from a count of cents
    pub fn from_cents(cents: u64) -> ValidationResult<Self> {
        if cents < u64::from(Self::MIN_CENTS) || cents > u64::from(Self::MAX_CENTS) {
            return Err(out_of_range());
        }
        // bounded by MAX_CENTS above
        Ok(Self(cents as u32))
    }

    pub fn cents(&self) -> u32 {
        self.0
    }

    /// Sum of two amounts, `None` when the result leaves the accepted range
    pub fn checked_add(self, other: Money) -> Option<Money> {
        Self::from_cents(u64::from(self.0) + u64::from(other.0)).ok()
    }

    /// Amount multiplied by a count, `None` when the result leaves the accepted range
    pub fn checked_mul(self, count: u32) -> Option<Money> {
        Self::from_cents(u64::from(self.0).checked_mul(u64::from(count))?).ok()
    }
}

fn invalid(rule: Rule, reason: &'static str) -> ValidationError {
    ValidationError::new(Domain::Money, rule, reason)
}

fn out_of_range() -> ValidationError {
    invalid(Rule::Range, "amount must be between 0,01 and 1.000.000,00")
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = (self.0 / 100).to_string();
        let cents = self.0 % 100;

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, c) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        write!(f, "{},{:02}", grouped, cents)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Money {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}
