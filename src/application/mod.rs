//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, policies)
//! - Does NOT contain business rules (those are in Domain)
//! - Is where decisions get logged; the domain stays silent
//!
//! ## Use Cases
//!
//! - `ReservationAdmission` - Admit or reject new and amended reservations

pub mod admission;

pub use admission::{AdmissionError, ReservationAdmission};
