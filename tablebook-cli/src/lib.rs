//! Library exports for tablebook-cli.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
