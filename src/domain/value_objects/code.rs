//! Code Value Object
//!
//! Ten alphanumeric characters identifying a hotel or a reservation.
//! Uniqueness is the owning collection's concern, not this type's.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

impl Code {
    pub const LENGTH: usize = 10;

    pub fn new(input: &str) -> ValidationResult<Self> {
        if input.chars().count() != Self::LENGTH {
            return Err(ValidationError::new(
                Domain::Code,
                Rule::Length,
                "must contain exactly 10 characters",
            ));
        }
        if !input.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::new(
                Domain::Code,
                Rule::Charset,
                "must contain only letters and digits",
            ));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Code {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Code {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.0
    }
}
