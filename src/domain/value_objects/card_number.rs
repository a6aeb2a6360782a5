//! Card Number Value Object
//!
//! Sixteen decimal digits whose last digit is the Luhn check digit of the
//! first fifteen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardNumber(String);

impl CardNumber {
    pub const LENGTH: usize = 16;

    pub fn new(input: &str) -> ValidationResult<Self> {
        if input.len() != Self::LENGTH {
            return Err(invalid(Rule::Length, "must contain exactly 16 digits"));
        }
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(Rule::Charset, "must contain only digits (0-9)"));
        }

        let digits = input.as_bytes();
        let (payload, check) = digits.split_at(Self::LENGTH - 1);
        if luhn_check_digit(payload) != check[0] - b'0' {
            return Err(invalid(Rule::Checksum, "check digit does not satisfy Luhn"));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(rule: Rule, reason: &'static str) -> ValidationError {
    ValidationError::new(Domain::CardNumber, rule, reason)
}

/// Luhn check digit for a run of ASCII digits
///
/// Starting with the rightmost payload digit, every second digit is doubled
/// (minus 9 when the double exceeds 9).
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CardNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CardNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CardNumber> for String {
    fn from(card: CardNumber) -> Self {
        card.0
    }
}
