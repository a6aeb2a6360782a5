//! Phone Number Value Object
//!
//! `+` followed by exactly 15 digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const LENGTH: usize = 16;

    pub fn new(input: &str) -> ValidationResult<Self> {
        let Some(digits) = input.strip_prefix('+') else {
            return Err(invalid(Rule::Format, "must start with '+'"));
        };
        if input.len() != Self::LENGTH {
            return Err(invalid(Rule::Length, "must contain exactly 16 characters"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(Rule::Charset, "only digits may follow the '+'"));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(rule: Rule, reason: &'static str) -> ValidationError {
    ValidationError::new(Domain::PhoneNumber, rule, reason)
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}
