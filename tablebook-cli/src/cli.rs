//! CLI structure and command definitions.

use crate::commands::{
    BookCommand, DaysCommand, InitCommand, PreviewCommand, ReservationsCommand, TableCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for restaurant table reservations.
#[derive(Parser)]
#[command(name = "tablebook")]
#[command(version, about = "Allocate restaurant tables to reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "TABLEBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "TABLEBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "TABLEBOOK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Manage dining tables
    Table(TableCommand),

    /// Book tables for a party
    Book(BookCommand),

    /// Show booked dates with remaining capacity
    Days(DaysCommand),

    /// Show booked dates that cannot take a party
    Preview(PreviewCommand),

    /// Inspect and delete reservations
    Reservations(ReservationsCommand),
}
