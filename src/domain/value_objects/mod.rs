//! Domain Value Objects
//!
//! Immutable value types that validate a primitive on construction and can
//! never hold an invalid state. Every type implements `FromStr`, `Display`
//! (the normalized form) and serde through its validating constructor.

mod address;
mod calendar;
mod calendar_date;
mod capacity;
mod card_number;
mod code;
mod config_warning;
mod email_address;
mod extension;
mod money;
mod password;
mod person_name;
mod phone_number;
mod room_number;
mod validation;

pub use address::Address;
pub use calendar::{days_in_month, is_leap_year, Month};
pub use calendar_date::CalendarDate;
pub use capacity::Capacity;
pub use card_number::{luhn_check_digit, CardNumber};
pub use code::Code;
pub use config_warning::ConfigWarning;
pub use email_address::EmailAddress;
pub use extension::Extension;
pub use money::Money;
pub use password::Password;
pub use person_name::PersonName;
pub use phone_number::PhoneNumber;
pub use room_number::RoomNumber;
pub use validation::{Domain, Rule, ValidationError, ValidationResult};
