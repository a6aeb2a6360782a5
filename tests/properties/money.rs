//! Property tests for money parsing and formatting.

use proptest::prelude::*;

use hotelier::Money;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every amount in range formats to text that parses back to it.
    #[test]
    fn property_money_display_round_trip(cents in Money::MIN_CENTS..=Money::MAX_CENTS) {
        let money = Money::from_cents(u64::from(cents)).unwrap();
        let text = money.to_string();
        let parsed = Money::new(&text).unwrap();

        prop_assert_eq!(parsed, money);
        prop_assert_eq!(parsed.to_string(), text);
    }

    /// PROPERTY: Grouped and ungrouped spellings of an amount agree.
    #[test]
    fn property_grouping_is_optional(cents in Money::MIN_CENTS..=Money::MAX_CENTS) {
        let plain = format!("{},{:02}", cents / 100, cents % 100);
        let money = Money::new(&plain).unwrap();
        prop_assert_eq!(money.cents(), cents);
    }

    /// PROPERTY: Amounts above the ceiling are always rejected.
    #[test]
    fn property_above_max_rejected(extra in 1u64..1_000_000_000) {
        prop_assert!(Money::from_cents(u64::from(Money::MAX_CENTS) + extra).is_err());
    }
}
