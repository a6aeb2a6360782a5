//! Person Name Value Object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

/// Name of a person or a hotel
///
/// 5 to 20 ASCII letters and single spaces. Every word starts with an
/// uppercase letter and the name does not end with a space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    pub const MIN_LENGTH: usize = 5;
    pub const MAX_LENGTH: usize = 20;

    pub fn new(input: &str) -> ValidationResult<Self> {
        let len = input.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&len) {
            return Err(invalid(
                Rule::Length,
                "must contain between 5 and 20 characters",
            ));
        }
        if input.ends_with(' ') {
            return Err(invalid(Rule::Sequence, "last character cannot be a space"));
        }
        if !input.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(invalid(
                Rule::Sequence,
                "first character must be an uppercase letter",
            ));
        }

        let mut word_start = false;
        for c in input.chars() {
            if word_start {
                word_start = false;
                match c {
                    'A'..='Z' => {}
                    'a'..='z' => {
                        return Err(invalid(
                            Rule::Sequence,
                            "each word must start with an uppercase letter (A-Z)",
                        ))
                    }
                    ' ' => {
                        return Err(invalid(
                            Rule::Sequence,
                            "a space must be followed by a letter",
                        ))
                    }
                    _ => return Err(charset()),
                }
            } else if c == ' ' {
                word_start = true;
            } else if !c.is_ascii_alphabetic() {
                return Err(charset());
            }
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(rule: Rule, reason: &'static str) -> ValidationError {
    ValidationError::new(Domain::PersonName, rule, reason)
}

fn charset() -> ValidationError {
    invalid(Rule::Charset, "use only letters (A-Z, a-z) and spaces")
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PersonName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PersonName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}
