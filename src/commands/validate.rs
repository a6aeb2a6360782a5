use anyhow::Result;
use hotelier::domain::value_objects::{
    Address, CalendarDate, Capacity, CardNumber, Code, EmailAddress, Extension, Money, Password,
    PersonName, PhoneNumber, RoomNumber, ValidationError,
};

use crate::cli::ValueKind;

/// Validate `input` as `kind` and return its normalized text.
pub fn normalize(kind: ValueKind, input: &str) -> Result<String, ValidationError> {
    let normalized = match kind {
        ValueKind::RoomNumber => input.parse::<RoomNumber>()?.to_string(),
        ValueKind::Password => Password::new(input)?.to_string(),
        ValueKind::Address => Address::new(input)?.to_string(),
        ValueKind::Money => Money::new(input)?.to_string(),
        ValueKind::CardNumber => CardNumber::new(input)?.to_string(),
        ValueKind::PersonName => PersonName::new(input)?.to_string(),
        ValueKind::Capacity => input.parse::<Capacity>()?.to_string(),
        ValueKind::Date => input.parse::<CalendarDate>()?.to_string(),
        ValueKind::PhoneNumber => PhoneNumber::new(input)?.to_string(),
        ValueKind::Code => Code::new(input)?.to_string(),
        ValueKind::Email => EmailAddress::new(input)?.to_string(),
        ValueKind::Extension => input.parse::<Extension>()?.to_string(),
    };
    Ok(normalized)
}

pub fn cmd_validate(kind: ValueKind, value: &[String], json: bool) -> Result<()> {
    let input = value.join(" ");
    let outcome = normalize(kind, &input);

    match &outcome {
        Ok(normalized) => tracing::info!(kind = kind.as_str(), %normalized, "value accepted"),
        Err(err) => tracing::info!(
            kind = kind.as_str(),
            rule = err.rule().as_str(),
            "value rejected"
        ),
    }

    if json {
        let event = match &outcome {
            Ok(normalized) => serde_json::json!({
                "event": "complete",
                "command": "validate",
                "kind": kind.as_str(),
                "valid": true,
                "value": normalized,
            }),
            Err(err) => serde_json::json!({
                "event": "complete",
                "command": "validate",
                "kind": kind.as_str(),
                "valid": false,
                "error": {
                    "domain": err.domain().as_str(),
                    "rule": err.rule().as_str(),
                    "reason": err.reason(),
                    "message": err.to_string(),
                },
            }),
        };
        crate::ui::json::emit(event)?;
    } else {
        match &outcome {
            Ok(normalized) => println!("{}", normalized),
            Err(err) => eprintln!("{}", err),
        }
    }

    if outcome.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
