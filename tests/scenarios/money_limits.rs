//! Scenario: Amount limits
//!
//! Journey: A clerk enters the smallest and largest amounts a reservation
//! may carry, then one cent beyond each.
//!
//! Success Criteria:
//! - 0,01 and 1.000.000,00 are accepted
//! - 0,00 and 1.000.000,01 are refused with a range error
//! - Quoting a long stay never overflows silently

use hotelier::domain::value_objects::{Capacity, Extension, Rule};
use hotelier::{Money, Room, RoomNumber};

/// SCENARIO: Boundaries of the accepted range
#[test]
fn scenario_money_min_and_max() {
    assert_eq!(Money::new("0,01").unwrap().cents(), 1);
    assert_eq!(Money::new("1.000.000,00").unwrap().cents(), 100_000_000);

    assert_eq!(Money::new("0,00").unwrap_err().rule(), Rule::Range);
    assert_eq!(Money::new("1.000.000,01").unwrap_err().rule(), Rule::Range);
}

/// SCENARIO: A quote beyond the ceiling is refused rather than wrapped
#[test]
fn scenario_quote_beyond_ceiling() {
    let room = Room::new(
        RoomNumber::new(101).unwrap(),
        Capacity::new(2).unwrap(),
        Money::new("250.000,00").unwrap(),
        Extension::new(12).unwrap(),
    );

    assert_eq!(room.quote(4).unwrap().to_string(), "1.000.000,00");
    assert!(room.quote(5).is_none());
    assert!(room.quote(u32::MAX).is_none());
}
