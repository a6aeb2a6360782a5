//! Admission result types

use thiserror::Error;

use crate::domain::value_objects::Code;

/// Why a reservation was not admitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// Another reservation already uses this code
    #[error("reservation code '{0}' is already in use")]
    DuplicateCode(Code),

    /// Dates overlap an existing reservation
    #[error("reservation '{candidate}' overlaps existing reservation '{existing}'")]
    Conflict { candidate: Code, existing: Code },
}
