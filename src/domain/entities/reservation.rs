//! Reservation entity
//!
//! A reservation books a [`StayPeriod`] under a unique [`Code`]. The room is
//! optional; a reservation without one is checked against every other
//! reservation.

use crate::domain::services::booking_conflict;
use crate::domain::value_objects::{
    CalendarDate, Code, Domain, Money, RoomNumber, Rule, ValidationError, ValidationResult,
};

/// Closed interval of days from arrival to departure, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayPeriod {
    arrival: CalendarDate,
    departure: CalendarDate,
}

impl StayPeriod {
    /// Build a period; departure may equal arrival but not precede it
    pub fn new(arrival: CalendarDate, departure: CalendarDate) -> ValidationResult<Self> {
        if departure < arrival {
            return Err(ValidationError::new(
                Domain::StayPeriod,
                Rule::Sequence,
                "departure cannot be before arrival",
            ));
        }
        Ok(Self { arrival, departure })
    }

    pub fn arrival(&self) -> CalendarDate {
        self.arrival
    }

    pub fn departure(&self) -> CalendarDate {
        self.departure
    }

    /// Whether the two periods share at least one day
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        booking_conflict::overlaps(
            &self.arrival,
            &self.departure,
            &other.arrival,
            &other.departure,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    code: Code,
    period: StayPeriod,
    amount: Money,
    room: Option<RoomNumber>,
}

impl Reservation {
    pub fn new(code: Code, period: StayPeriod, amount: Money) -> Self {
        Self {
            code,
            period,
            amount,
            room: None,
        }
    }

    /// Attach the room this reservation is for
    pub fn for_room(mut self, room: RoomNumber) -> Self {
        self.room = Some(room);
        self
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn period(&self) -> &StayPeriod {
        &self.period
    }

    pub fn arrival(&self) -> CalendarDate {
        self.period.arrival
    }

    pub fn departure(&self) -> CalendarDate {
        self.period.departure
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn room(&self) -> Option<RoomNumber> {
        self.room
    }

    pub fn with_code(self, code: Code) -> Self {
        Self { code, ..self }
    }

    pub fn with_period(self, period: StayPeriod) -> Self {
        Self { period, ..self }
    }

    pub fn with_amount(self, amount: Money) -> Self {
        Self { amount, ..self }
    }
}
