//! Tracing subscriber setup for the CLI
//!
//! Events go to stderr so stdout stays machine-readable under `--json`.
//! `RUST_LOG` wins over the configured verbosity.

use std::io::IsTerminal;

use hotelier::Verbosity;
use tracing_subscriber::EnvFilter;

pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
