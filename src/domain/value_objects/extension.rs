//! Extension Value Object
//!
//! Internal telephone extension of a manager or a room, 0 to 50.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Extension(u8);

impl Extension {
    pub const MAX: u8 = 50;

    pub fn new(value: u8) -> ValidationResult<Self> {
        if value > Self::MAX {
            return Err(ValidationError::new(
                Domain::Extension,
                Rule::Range,
                "must be between 0 and 50",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Extension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u8>().map_err(|_| {
            ValidationError::new(Domain::Extension, Rule::Format, "must be a whole number")
        })?;
        Self::new(value)
    }
}

impl TryFrom<u8> for Extension {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Extension> for u8 {
    fn from(extension: Extension) -> Self {
        extension.0
    }
}
