use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hotelier::RoomNumber;

/// Hotelier - validate hotel-booking values and check stay overlaps
#[derive(Parser, Debug)]
#[command(name = "hotelier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable output (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./hotelier.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a value and print its normalized form
    Validate {
        /// Kind of value to validate
        kind: ValueKind,

        /// The value; multiple words are joined with single spaces.
        /// Pass values starting with '-' after `--`.
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },

    /// Check whether two stays share at least one day
    Overlap {
        /// Arrival of the first stay (DD-MMM-YYYY)
        start_a: String,
        /// Departure of the first stay (DD-MMM-YYYY)
        end_a: String,
        /// Arrival of the second stay (DD-MMM-YYYY)
        start_b: String,
        /// Departure of the second stay (DD-MMM-YYYY)
        end_b: String,

        /// Room of the first stay
        #[arg(long)]
        room_a: Option<RoomNumber>,

        /// Room of the second stay
        #[arg(long)]
        room_b: Option<RoomNumber>,
    },
}

/// Value kinds accepted by `validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    RoomNumber,
    Password,
    Address,
    Money,
    CardNumber,
    PersonName,
    Capacity,
    Date,
    PhoneNumber,
    Code,
    Email,
    Extension,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::RoomNumber => "room-number",
            ValueKind::Password => "password",
            ValueKind::Address => "address",
            ValueKind::Money => "money",
            ValueKind::CardNumber => "card-number",
            ValueKind::PersonName => "person-name",
            ValueKind::Capacity => "capacity",
            ValueKind::Date => "date",
            ValueKind::PhoneNumber => "phone-number",
            ValueKind::Code => "code",
            ValueKind::Email => "email",
            ValueKind::Extension => "extension",
        }
    }
}
