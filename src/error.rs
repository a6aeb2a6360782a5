//! Error types for Hotelier
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::AdmissionError;
use crate::domain::value_objects::ValidationError;

/// Result type alias for Hotelier operations
pub type HotelierResult<T> = Result<T, HotelierError>;

/// Main error type for Hotelier operations
#[derive(Error, Debug)]
pub enum HotelierError {
    /// A value object rejected its input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A reservation was refused
    #[error(transparent)]
    Admission(#[from] AdmissionError),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
