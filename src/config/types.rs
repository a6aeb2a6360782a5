//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader;
use crate::domain::policies::ConflictScope;
use crate::domain::value_objects::ConfigWarning;
use crate::error::HotelierResult;

/// Booking configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BookingConfig {
    /// Which existing reservations a new one is checked against
    #[serde(default)]
    pub conflict_scope: ConflictScope,
}

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Raise the level by the number of `-v` flags, saturating at `Debug`.
    pub fn raised_by(self, count: u8) -> Self {
        let rank = match self {
            Self::Quiet => 0u8,
            Self::Normal => 1,
            Self::Verbose => 2,
            Self::Debug => 3,
        };
        match rank.saturating_add(count) {
            0 => Self::Quiet,
            1 => Self::Normal,
            2 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub booking: BookingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HotelierResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> HotelierResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, `./hotelier.toml`, user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> HotelierResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (HOTELIER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
