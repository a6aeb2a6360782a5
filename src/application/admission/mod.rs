//! Admission Use Case
//!
//! Decides whether a new or amended reservation may join the current set of
//! reservations.
//!
//! This module handles:
//! - Rejecting duplicate reservation codes
//! - Skipping the reservation's own previous version on amendment
//! - Consulting the booking conflict detector under the configured scope

mod result;
mod use_case;


pub use result::AdmissionError;
pub use use_case::ReservationAdmission;
