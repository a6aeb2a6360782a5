//! Property tests for the calendar engine.

use proptest::prelude::*;

use hotelier::domain::value_objects::{days_in_month, is_leap_year, CalendarDate, Month};

fn month() -> impl Strategy<Value = Month> {
    proptest::sample::select(Month::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A date is valid exactly when its day fits the month's length.
    #[test]
    fn property_day_bounds_follow_days_in_month(
        day in 0u8..=32,
        month in month(),
        year in CalendarDate::MIN_YEAR..=CalendarDate::MAX_YEAR,
    ) {
        let valid = day >= 1 && day <= days_in_month(month, year);
        prop_assert_eq!(CalendarDate::from_parts(day, month, year).is_ok(), valid);
    }

    /// PROPERTY: 29 FEV exists exactly in leap years.
    #[test]
    fn property_leap_day_only_in_leap_years(
        year in CalendarDate::MIN_YEAR..=CalendarDate::MAX_YEAR,
    ) {
        let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        prop_assert_eq!(is_leap_year(year), leap);
        prop_assert_eq!(CalendarDate::new(29, "FEV", year).is_ok(), leap);
    }

    /// PROPERTY: Valid dates round-trip through their display form.
    #[test]
    fn property_date_display_round_trip(
        day in 1u8..=28,
        month in month(),
        year in CalendarDate::MIN_YEAR..=CalendarDate::MAX_YEAR,
    ) {
        let date = CalendarDate::from_parts(day, month, year).unwrap();
        let parsed: CalendarDate = date.to_string().parse().unwrap();
        prop_assert_eq!(parsed, date);
    }

    /// PROPERTY: Date order agrees with (year, month, day) order.
    #[test]
    fn property_sort_key_matches_tuple_order(
        a in (1u8..=28, month(), 2000u16..=2999),
        b in (1u8..=28, month(), 2000u16..=2999),
    ) {
        let da = CalendarDate::from_parts(a.0, a.1, a.2).unwrap();
        let db = CalendarDate::from_parts(b.0, b.1, b.2).unwrap();
        let tuple_order = (a.2, a.1.number(), a.0).cmp(&(b.2, b.1.number(), b.0));
        prop_assert_eq!(da.cmp(&db), tuple_order);
    }
}

#[test]
fn test_century_boundaries() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(2100));
    assert!(is_leap_year(2400));
    assert!(!is_leap_year(2023));
}
