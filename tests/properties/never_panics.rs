//! Every validator returns a result for arbitrary text instead of panicking.

use proptest::prelude::*;

use hotelier::domain::value_objects::{
    Address, CalendarDate, Capacity, CardNumber, Code, EmailAddress, Extension, Money, Password,
    PersonName, PhoneNumber, RoomNumber,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No validator panics on arbitrary small input.
    #[test]
    fn property_validators_never_panic(input in "(?s).{0,64}") {
        let _ = Address::new(&input);
        let _ = input.parse::<CalendarDate>();
        let _ = input.parse::<Capacity>();
        let _ = CardNumber::new(&input);
        let _ = Code::new(&input);
        let _ = EmailAddress::new(&input);
        let _ = input.parse::<Extension>();
        let _ = Money::new(&input);
        let _ = Password::new(&input);
        let _ = PersonName::new(&input);
        let _ = PhoneNumber::new(&input);
        let _ = input.parse::<RoomNumber>();
    }

    /// PROPERTY: Inputs shaped like the real formats never panic either.
    #[test]
    fn property_near_miss_inputs_never_panic(
        money in "[0-9.,]{0,20}",
        date in "[0-9]{0,3}-[A-Za-z]{0,4}-[0-9]{0,6}",
        card in "[0-9]{14,17}",
    ) {
        let _ = Money::new(&money);
        let _ = date.parse::<CalendarDate>();
        let _ = CardNumber::new(&card);
    }
}
