//! Password Value Object
//!
//! Five characters drawn from letters, digits and `!"#$%&?`, containing at
//! least one of each class. A letter may not follow a letter and a digit may
//! not follow a digit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

const SPECIALS: &[u8] = b"!\"#$%&?";

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password(String);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Lower,
    Upper,
    Digit,
    Special,
}

impl Class {
    fn of(b: u8) -> Option<Self> {
        match b {
            b'a'..=b'z' => Some(Class::Lower),
            b'A'..=b'Z' => Some(Class::Upper),
            b'0'..=b'9' => Some(Class::Digit),
            _ if SPECIALS.contains(&b) => Some(Class::Special),
            _ => None,
        }
    }

    fn is_letter(self) -> bool {
        matches!(self, Class::Lower | Class::Upper)
    }
}

impl Password {
    pub const LENGTH: usize = 5;

    pub fn new(input: &str) -> ValidationResult<Self> {
        if input.chars().count() != Self::LENGTH {
            return Err(invalid(Rule::Length, "must contain exactly 5 characters"));
        }

        let mut classes = Vec::with_capacity(Self::LENGTH);
        for b in input.bytes() {
            let class = Class::of(b).ok_or_else(|| {
                invalid(
                    Rule::Charset,
                    "use letters (a-z, A-Z), digits (0-9) or !\"#$%&?",
                )
            })?;
            classes.push(class);
        }

        let has = |c: Class| classes.contains(&c);
        if !(has(Class::Lower) && has(Class::Upper) && has(Class::Digit) && has(Class::Special)) {
            return Err(invalid(
                Rule::Composition,
                "needs a lowercase letter, an uppercase letter, a digit and a special character",
            ));
        }

        for pair in classes.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            if current.is_letter() && next.is_letter() {
                return Err(invalid(Rule::Sequence, "a letter cannot follow a letter"));
            }
            if current == Class::Digit && next == Class::Digit {
                return Err(invalid(Rule::Sequence, "a digit cannot follow a digit"));
            }
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(rule: Rule, reason: &'static str) -> ValidationError {
    ValidationError::new(Domain::Password, rule, reason)
}

// Keep secrets out of debug output.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Password {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Password {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.0
    }
}
