//! Domain Layer
//!
//! This is the core of Hotelier - validation and scheduling rules without
//! I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Self-validating primitives (Money, CalendarDate, Password, ...)
//! - `entities/` - Aggregates built from value objects (Hotel, Room, Reservation, ...)
//! - `services/` - Booking conflict detection
//! - `policies/` - Business rules (ConflictScope)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never logs, reads or writes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Valid by construction** - An invalid value object cannot exist

pub mod entities;
pub mod policies;
pub mod services;
pub mod value_objects;
