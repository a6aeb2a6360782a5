//! Hotelier CLI - hotel-booking value validation and stay overlap checks
//!
//! Usage: hotelier <COMMAND>
//!
//! Commands:
//!   validate  Validate a value and print its normalized form
//!   overlap   Check whether two stays share at least one day

mod cli;
mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;
use hotelier::{Config, OutputFormat};

use cli::{Cli, Commands};
use commands::overlap::StayArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    config.output.verbosity = config.output.verbosity.raised_by(cli.verbose);

    logging::init(config.output.verbosity);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let json = config.output.format == OutputFormat::Json;

    match cli.command {
        Commands::Validate { kind, value } => commands::validate::cmd_validate(kind, &value, json),
        Commands::Overlap {
            start_a,
            end_a,
            start_b,
            end_b,
            room_a,
            room_b,
        } => commands::overlap::cmd_overlap(
            StayArgs {
                arrival: &start_a,
                departure: &end_a,
                room: room_a,
            },
            StayArgs {
                arrival: &start_b,
                departure: &end_b,
                room: room_b,
            },
            config.booking.conflict_scope,
            json,
        ),
    }
}
