//! Domain Entities
//!
//! Plain aggregates built only from validated value objects.
//! - `Person`, `Manager`, `Guest` - people
//! - `Hotel`, `Room` - infrastructure
//! - `Reservation`, `StayPeriod` - bookings

mod hotel;
mod person;
mod reservation;

pub use hotel::{Hotel, Room};
pub use person::{Guest, Manager, Person};
pub use reservation::{Reservation, StayPeriod};
