//! Property tests for email normalization.

use proptest::prelude::*;

use hotelier::EmailAddress;

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9]{1,8}").unwrap()
}

fn dotted(max_labels: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(label(), 1..=max_labels).prop_map(|labels| labels.join("."))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Well-formed addresses are accepted, lowercased, and stable
    /// under re-validation.
    #[test]
    fn property_email_normalization_is_idempotent(
        local in dotted(3),
        domain in dotted(3),
    ) {
        let input = format!("{local}@{domain}");
        let email = EmailAddress::new(&input).unwrap();

        prop_assert_eq!(email.as_str(), input.to_lowercase());
        let again = EmailAddress::new(email.as_str()).unwrap();
        prop_assert_eq!(again, email);
    }

    /// PROPERTY: Accepted addresses never start, end, or double up on `.`/`-`
    /// in the local part.
    #[test]
    fn property_accepted_local_parts_are_clean(input in "[a-z.-]{1,10}@[a-z]{1,6}") {
        if let Ok(email) = EmailAddress::new(&input) {
            let local = email.local_part();
            prop_assert!(!local.starts_with(['.', '-']));
            prop_assert!(!local.ends_with(['.', '-']));
            for pair in local.as_bytes().windows(2) {
                let both_special = matches!(pair[0], b'.' | b'-') && matches!(pair[1], b'.' | b'-');
                prop_assert!(!both_special, "accepted {:?}", input);
            }
        }
    }
}
