//! Scenario: Front desk setup
//!
//! Journey: A hotel is registered with a manager and a guest. The guest books
//! two rooms for overlapping dates, then amends one booking.
//!
//! Success Criteria:
//! - Every record is built from validated text
//! - Same-room scope lets different rooms share dates
//! - Amending a reservation never conflicts with itself
//! - A reused code is refused before any date check

use hotelier::{
    AdmissionError, Address, CardNumber, Code, ConflictScope, EmailAddress, Extension, Guest,
    Hotel, Manager, Money, Password, Person, PersonName, PhoneNumber, Reservation,
    ReservationAdmission, RoomNumber, StayPeriod,
};

fn period(arrival: &str, departure: &str) -> StayPeriod {
    StayPeriod::new(arrival.parse().unwrap(), departure.parse().unwrap()).unwrap()
}

/// SCENARIO: Registering the people and the hotel
#[test]
fn scenario_register_hotel_and_people() {
    let hotel = Hotel::new(
        Code::new("HOTEL00001").unwrap(),
        PersonName::new("Grande Hotel").unwrap(),
        Address::new("Av. Atlantica, 1702").unwrap(),
        PhoneNumber::new("+552125457070000").unwrap(),
    );
    assert_eq!(hotel.name().as_str(), "Grande Hotel");

    let manager = Manager::new(
        Person::new(
            PersonName::new("Ana Souza").unwrap(),
            EmailAddress::new("Ana.Souza@Hotel.com").unwrap(),
        ),
        Extension::new(10).unwrap(),
        Password::new("a1B2!").unwrap(),
    );
    assert!(manager.verify_password(&Password::new("a1B2!").unwrap()));
    assert!(!manager.verify_password(&Password::new("b1B2!").unwrap()));
    assert_eq!(manager.person().email().as_str(), "ana.souza@hotel.com");

    let guest = Guest::new(
        Person::new(
            PersonName::new("Maria Silva").unwrap(),
            EmailAddress::new("maria@teste.com").unwrap(),
        ),
        Address::new("Rua A, 10").unwrap(),
        CardNumber::new("4539148803436467").unwrap(),
    );
    assert_eq!(guest.card().as_str(), "4539148803436467");
}

/// SCENARIO: Two rooms, same dates, then an amendment
#[test]
fn scenario_two_rooms_then_amend() {
    let admission = ReservationAdmission::new(ConflictScope::SameRoom);

    let first = Reservation::new(
        Code::new("RES0000101").unwrap(),
        period("01-MAR-2025", "05-MAR-2025"),
        Money::new("1.000,00").unwrap(),
    )
    .for_room(RoomNumber::new(101).unwrap());
    let mut book = vec![first];

    let second = Reservation::new(
        Code::new("RES0000102").unwrap(),
        period("03-MAR-2025", "06-MAR-2025"),
        Money::new("800,00").unwrap(),
    )
    .for_room(RoomNumber::new(102).unwrap());
    admission.admit_new(&second, &book).unwrap();
    book.push(second);

    let amended = book[0].clone().with_period(period("02-MAR-2025", "07-MAR-2025"));
    admission.admit_amendment(&amended, &book).unwrap();

    let clash = Reservation::new(
        Code::new("RES0000103").unwrap(),
        period("04-MAR-2025", "04-MAR-2025"),
        Money::new("200,00").unwrap(),
    )
    .for_room(RoomNumber::new(101).unwrap());
    assert!(matches!(
        admission.admit_new(&clash, &book),
        Err(AdmissionError::Conflict { .. })
    ));
}

/// SCENARIO: A reused code is refused even when the dates are free
#[test]
fn scenario_reused_code_refused() {
    let book = vec![Reservation::new(
        Code::new("RES0000201").unwrap(),
        period("01-ABR-2025", "03-ABR-2025"),
        Money::new("300,00").unwrap(),
    )];
    let again = Reservation::new(
        Code::new("RES0000201").unwrap(),
        period("10-ABR-2025", "12-ABR-2025"),
        Money::new("300,00").unwrap(),
    );

    let err = ReservationAdmission::default().admit_new(&again, &book).unwrap_err();
    assert_eq!(
        err,
        AdmissionError::DuplicateCode(Code::new("RES0000201").unwrap())
    );
}
