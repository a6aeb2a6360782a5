//! Email Address Value Object
//!
//! A lightweight `local@domain` check: both parts use letters, digits, `.`
//! and `-`, never start or end with `.`/`-`, and never hold two of those in a
//! row. The domain additionally allows `--` (as in `xn--` labels). The stored
//! form is lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Domain, Rule, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Part {
    Local,
    Domain,
}

impl EmailAddress {
    pub const MAX_LOCAL_LENGTH: usize = 64;
    pub const MAX_DOMAIN_LENGTH: usize = 255;

    pub fn new(input: &str) -> ValidationResult<Self> {
        let (local, domain) = input
            .split_once('@')
            .ok_or_else(|| invalid(Rule::Format, "must contain '@'"))?;

        if local.is_empty() || local.len() > Self::MAX_LOCAL_LENGTH {
            return Err(invalid(
                Rule::Length,
                "local part must contain between 1 and 64 characters",
            ));
        }
        if domain.is_empty() || domain.len() > Self::MAX_DOMAIN_LENGTH {
            return Err(invalid(
                Rule::Length,
                "domain must contain between 1 and 255 characters",
            ));
        }

        let local = normalize_part(local, Part::Local)?;
        let domain = normalize_part(domain, Part::Domain)?;

        Ok(Self(format!("{local}@{domain}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

/// Lowercase one side of the address and check its characters
fn normalize_part(part: &str, which: Part) -> ValidationResult<String> {
    let mut out = String::with_capacity(part.len());
    let mut previous: Option<u8> = None;
    let mut at_start = true;

    for b in part.bytes() {
        let b = b.to_ascii_lowercase();
        let special = matches!(b, b'.' | b'-');
        if !(b.is_ascii_alphanumeric() || special) {
            return Err(invalid(
                Rule::Charset,
                "may contain only letters, digits, '.' or '-'",
            ));
        }

        if special {
            if at_start {
                return Err(invalid(Rule::Sequence, "cannot start with '.' or '-'"));
            }
            if let Some(prev) = previous.filter(|p| matches!(*p, b'.' | b'-')) {
                let double_hyphen = prev == b'-' && b == b'-';
                if !(which == Part::Domain && double_hyphen) {
                    return Err(invalid(
                        Rule::Sequence,
                        "cannot contain '.' or '-' twice in a row",
                    ));
                }
            }
        }

        at_start = false;
        previous = Some(b);
        out.push(char::from(b));
    }

    if matches!(previous, Some(b'.' | b'-')) {
        let reason = match which {
            Part::Local => "local part cannot end with '.' or '-'",
            Part::Domain => "domain cannot end with '.' or '-'",
        };
        return Err(invalid(Rule::Sequence, reason));
    }

    Ok(out)
}

fn invalid(rule: Rule, reason: &'static str) -> ValidationError {
    ValidationError::new(Domain::EmailAddress, rule, reason)
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
