//! Address Value Object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

/// Street address of a guest or a hotel
///
/// 5 to 30 characters of letters, digits, `,`, `.` and space. The first and
/// last characters must be alphanumeric, `,`/`.` may not be followed by `,`/`.`,
/// and a space must be followed by a letter or digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MIN_LENGTH: usize = 5;
    pub const MAX_LENGTH: usize = 30;

    pub fn new(input: &str) -> ValidationResult<Self> {
        let len = input.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&len) {
            return Err(invalid(
                Rule::Length,
                "must contain between 5 and 30 characters",
            ));
        }

        let bytes = input.as_bytes();
        let last = bytes.len() - 1;
        for (i, &b) in bytes.iter().enumerate() {
            let punctuation = matches!(b, b',' | b'.' | b' ');
            if !(b.is_ascii_alphanumeric() || punctuation) {
                return Err(invalid(
                    Rule::Charset,
                    "use letters, digits, comma, period or space",
                ));
            }
            if punctuation && (i == 0 || i == last) {
                return Err(invalid(
                    Rule::Sequence,
                    "first and last characters cannot be a comma, period or space",
                ));
            }
        }

        for pair in bytes.windows(2) {
            match (pair[0], pair[1]) {
                (b',', b',' | b'.') => {
                    return Err(invalid(
                        Rule::Sequence,
                        "a comma cannot be followed by a comma or period",
                    ))
                }
                (b'.', b',' | b'.') => {
                    return Err(invalid(
                        Rule::Sequence,
                        "a period cannot be followed by a comma or period",
                    ))
                }
                (b' ', next) if !next.is_ascii_alphanumeric() => {
                    return Err(invalid(
                        Rule::Sequence,
                        "a space must be followed by a letter or digit",
                    ))
                }
                _ => {}
            }
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(rule: Rule, reason: &'static str) -> ValidationError {
    ValidationError::new(Domain::Address, rule, reason)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}
