//! Property tests for password adjacency rules.

use proptest::prelude::*;

use hotelier::domain::value_objects::{Password, Rule};

const SPECIALS: &str = "!\"#$%&?";

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An accepted password never has two adjacent letters or two
    /// adjacent digits.
    #[test]
    fn property_accepted_passwords_have_no_forbidden_pairs(
        input in "[a-zA-Z0-9!\"#$%&?]{5}",
    ) {
        if Password::new(&input).is_ok() {
            for pair in input.as_bytes().windows(2) {
                let letters = pair[0].is_ascii_alphabetic() && pair[1].is_ascii_alphabetic();
                let digits = pair[0].is_ascii_digit() && pair[1].is_ascii_digit();
                prop_assert!(!letters && !digits, "accepted {:?}", input);
            }
        }
    }

    /// PROPERTY: Lower/digit/upper/digit/special is always accepted.
    #[test]
    fn property_alternating_shape_is_accepted(
        lower in proptest::char::range('a', 'z'),
        upper in proptest::char::range('A', 'Z'),
        d1 in proptest::char::range('0', '9'),
        d2 in proptest::char::range('0', '9'),
        special in proptest::sample::select(SPECIALS.chars().collect::<Vec<_>>()),
    ) {
        let input: String = [lower, d1, upper, d2, special].iter().collect();
        prop_assert!(Password::new(&input).is_ok(), "rejected {:?}", input);
    }

    /// PROPERTY: Two letters side by side are a sequence error once the rest
    /// of the password is well formed.
    #[test]
    fn property_adjacent_letters_rejected(
        lower in proptest::char::range('a', 'z'),
        upper in proptest::char::range('A', 'Z'),
        digit in proptest::char::range('0', '9'),
        special in proptest::sample::select(SPECIALS.chars().collect::<Vec<_>>()),
    ) {
        let input: String = [lower, upper, digit, special, '1'].iter().collect();
        let err = Password::new(&input).unwrap_err();
        prop_assert_eq!(err.rule(), Rule::Sequence);
    }
}
