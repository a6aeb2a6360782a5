//! Hotelier - validated hotel-booking domain core
//!
//! Hotelier provides self-validating value types (room numbers, passwords,
//! money, card numbers, dates and more), a Gregorian calendar engine, and a
//! booking-conflict detector that decides whether a reservation's stay
//! overlaps the ones already on the books.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{AdmissionError, ReservationAdmission};
pub use config::{Config, OutputFormat, Verbosity};
pub use domain::entities::{Guest, Hotel, Manager, Person, Reservation, Room, StayPeriod};
pub use domain::policies::ConflictScope;
pub use domain::services::{first_conflict, overlaps};
pub use domain::value_objects::{
    Address, CalendarDate, Capacity, CardNumber, Code, EmailAddress, Extension, Money, Month,
    Password, PersonName, PhoneNumber, RoomNumber, ValidationError,
};
pub use error::{HotelierError, HotelierResult};
