//! Scenario: Back-to-back stays
//!
//! Journey: A reservation ends on 15-JAN-2025. A second guest asks to arrive
//! the same day, then the day after.
//!
//! Success Criteria:
//! - Arrival on the existing departure day is refused (bounds are inclusive)
//! - Arrival the next day is admitted
//! - The CLI gives the same answers

use crate::common::TestEnv;
use hotelier::{
    AdmissionError, CalendarDate, Code, Money, Reservation, ReservationAdmission, StayPeriod,
};

fn stay(code: &str, arrival: &str, departure: &str) -> Reservation {
    let arrival: CalendarDate = arrival.parse().unwrap();
    let departure: CalendarDate = departure.parse().unwrap();
    Reservation::new(
        Code::new(code).unwrap(),
        StayPeriod::new(arrival, departure).unwrap(),
        Money::new("750,00").unwrap(),
    )
}

/// SCENARIO: Arrival on the day an existing stay departs
#[test]
fn scenario_same_day_turnover_is_refused() {
    let existing = vec![stay("RES0000001", "10-JAN-2025", "15-JAN-2025")];
    let candidate = stay("RES0000002", "15-JAN-2025", "20-JAN-2025");

    let err = ReservationAdmission::default()
        .admit_new(&candidate, &existing)
        .unwrap_err();

    assert_eq!(
        err,
        AdmissionError::Conflict {
            candidate: Code::new("RES0000002").unwrap(),
            existing: Code::new("RES0000001").unwrap(),
        }
    );
}

/// SCENARIO: Arrival the day after an existing stay departs
#[test]
fn scenario_next_day_arrival_is_admitted() {
    let existing = vec![stay("RES0000001", "10-JAN-2025", "15-JAN-2025")];
    let candidate = stay("RES0000002", "16-JAN-2025", "20-JAN-2025");

    assert!(ReservationAdmission::default()
        .admit_new(&candidate, &existing)
        .is_ok());
}

/// SCENARIO: The CLI agrees with the library
#[test]
fn scenario_cli_matches_library() {
    let env = TestEnv::new();

    let same_day = env.run(&[
        "overlap",
        "10-JAN-2025",
        "15-JAN-2025",
        "15-JAN-2025",
        "20-JAN-2025",
    ]);
    assert_eq!(same_day.stdout.trim(), "conflict");

    let next_day = env.run(&[
        "overlap",
        "10-JAN-2025",
        "15-JAN-2025",
        "16-JAN-2025",
        "20-JAN-2025",
    ]);
    assert_eq!(next_day.stdout.trim(), "no conflict");
}
