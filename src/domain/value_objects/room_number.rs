//! Room Number Value Object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

/// Number of a room within a hotel, 1 to 999
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct RoomNumber(u16);

impl RoomNumber {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 999;

    pub fn new(value: u16) -> ValidationResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::new(
                Domain::RoomNumber,
                Rule::Range,
                "must be between 001 and 999",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl FromStr for RoomNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u16>().map_err(|_| {
            ValidationError::new(Domain::RoomNumber, Rule::Format, "must be a whole number")
        })?;
        Self::new(value)
    }
}

impl TryFrom<u16> for RoomNumber {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomNumber> for u16 {
    fn from(number: RoomNumber) -> Self {
        number.0
    }
}
