//! Configuration module for Hotelier
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HOTELIER_*)
//! 3. `--config PATH`, else `./hotelier.toml`
//! 4. User config (~/.config/hotelier/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{apply_env_overrides, PROJECT_CONFIG_FILE};
pub use types::{BookingConfig, Config, OutputConfig, OutputFormat, Verbosity};
