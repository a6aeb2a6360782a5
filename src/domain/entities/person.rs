//! People entities - managers and guests
//!
//! Both roles share a [`Person`] record (name and email) by composition.

use crate::domain::value_objects::{
    Address, CardNumber, EmailAddress, Extension, Password, PersonName,
};

/// Name and email shared by every person in the system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: PersonName,
    email: EmailAddress,
}

impl Person {
    pub fn new(name: PersonName, email: EmailAddress) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn with_name(self, name: PersonName) -> Self {
        Self { name, ..self }
    }

    pub fn with_email(self, email: EmailAddress) -> Self {
        Self { email, ..self }
    }
}

/// Hotel manager, identified by email and authenticated by password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    person: Person,
    extension: Extension,
    password: Password,
}

impl Manager {
    pub fn new(person: Person, extension: Extension, password: Password) -> Self {
        Self {
            person,
            extension,
            password,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn extension(&self) -> Extension {
        self.extension
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Check a login attempt against the stored password
    pub fn verify_password(&self, attempt: &Password) -> bool {
        self.password == *attempt
    }

    pub fn with_person(self, person: Person) -> Self {
        Self { person, ..self }
    }

    pub fn with_extension(self, extension: Extension) -> Self {
        Self { extension, ..self }
    }

    pub fn with_password(self, password: Password) -> Self {
        Self { password, ..self }
    }
}

/// Hotel guest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    person: Person,
    address: Address,
    card: CardNumber,
}

impl Guest {
    pub fn new(person: Person, address: Address, card: CardNumber) -> Self {
        Self {
            person,
            address,
            card,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn card(&self) -> &CardNumber {
        &self.card
    }

    pub fn with_person(self, person: Person) -> Self {
        Self { person, ..self }
    }

    pub fn with_address(self, address: Address) -> Self {
        Self { address, ..self }
    }

    pub fn with_card(self, card: CardNumber) -> Self {
        Self { card, ..self }
    }
}
