//! Validation Error
//!
//! Every value object constructor reports failure through a single
//! [`ValidationError`] naming the domain, the rule that was broken, and a
//! human-readable reason.

use std::fmt;

use thiserror::Error;

/// Which value object rejected its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    RoomNumber,
    Password,
    Address,
    Money,
    CardNumber,
    PersonName,
    Capacity,
    CalendarDate,
    PhoneNumber,
    Code,
    EmailAddress,
    Extension,
    /// Arrival/departure pair held by a reservation
    StayPeriod,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::RoomNumber => "room number",
            Domain::Password => "password",
            Domain::Address => "address",
            Domain::Money => "money",
            Domain::CardNumber => "card number",
            Domain::PersonName => "person name",
            Domain::Capacity => "capacity",
            Domain::CalendarDate => "date",
            Domain::PhoneNumber => "phone number",
            Domain::Code => "code",
            Domain::EmailAddress => "email address",
            Domain::Extension => "extension",
            Domain::StayPeriod => "stay period",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of the violated rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Too short, too long, or not the exact size
    Length,
    /// A character outside the allowed set
    Charset,
    /// A required character class is missing
    Composition,
    /// Illegal ordering or adjacency of characters
    Sequence,
    /// Numeric value outside its bounds
    Range,
    /// Check digit mismatch
    Checksum,
    /// Input does not follow the expected textual layout
    Format,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Charset => "charset",
            Rule::Composition => "composition",
            Rule::Sequence => "sequence",
            Rule::Range => "range",
            Rule::Checksum => "checksum",
            Rule::Format => "format",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a value object constructor rejects its input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {domain}: {reason}")]
pub struct ValidationError {
    domain: Domain,
    rule: Rule,
    reason: &'static str,
}

impl ValidationError {
    pub fn new(domain: Domain, rule: Rule, reason: &'static str) -> Self {
        Self {
            domain,
            rule,
            reason,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Shorthand for the result of a value object constructor
pub type ValidationResult<T> = Result<T, ValidationError>;
