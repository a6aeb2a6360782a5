//! Output helpers for the CLI

pub mod json;
