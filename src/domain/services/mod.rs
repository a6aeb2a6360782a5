//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod booking_conflict;

pub use booking_conflict::{first_conflict, overlaps};
