//! Hotel and room entities

use crate::domain::value_objects::{
    Address, Capacity, Code, Extension, Money, PersonName, PhoneNumber, RoomNumber,
};

/// A hotel, keyed by its [`Code`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    code: Code,
    name: PersonName,
    address: Address,
    phone: PhoneNumber,
}

impl Hotel {
    pub fn new(code: Code, name: PersonName, address: Address, phone: PhoneNumber) -> Self {
        Self {
            code,
            name,
            address,
            phone,
        }
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn with_code(self, code: Code) -> Self {
        Self { code, ..self }
    }

    pub fn with_name(self, name: PersonName) -> Self {
        Self { name, ..self }
    }

    pub fn with_address(self, address: Address) -> Self {
        Self { address, ..self }
    }

    pub fn with_phone(self, phone: PhoneNumber) -> Self {
        Self { phone, ..self }
    }
}

/// A bookable room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    number: RoomNumber,
    capacity: Capacity,
    daily_rate: Money,
    extension: Extension,
}

impl Room {
    pub fn new(
        number: RoomNumber,
        capacity: Capacity,
        daily_rate: Money,
        extension: Extension,
    ) -> Self {
        Self {
            number,
            capacity,
            daily_rate,
            extension,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn daily_rate(&self) -> Money {
        self.daily_rate
    }

    pub fn extension(&self) -> Extension {
        self.extension
    }

    /// Price of staying `nights` nights at the daily rate
    pub fn quote(&self, nights: u32) -> Option<Money> {
        self.daily_rate.checked_mul(nights)
    }

    pub fn with_number(self, number: RoomNumber) -> Self {
        Self { number, ..self }
    }

    pub fn with_capacity(self, capacity: Capacity) -> Self {
        Self { capacity, ..self }
    }

    pub fn with_daily_rate(self, daily_rate: Money) -> Self {
        Self { daily_rate, ..self }
    }

    pub fn with_extension(self, extension: Extension) -> Self {
        Self { extension, ..self }
    }
}
