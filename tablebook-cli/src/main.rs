//! Main entry point for the tablebook CLI.

use clap::Parser;
use tablebook_cli::cli::{Cli, Command};
use tablebook_cli::error::CliError;
use tablebook_cli::utils::GlobalOptions;

fn main() {
    // Help and version go to stdout with exit code 0; parse errors map to 4
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(CliError::InvalidArguments(e.to_string()).exit_code());
        }
    };

    tablebook::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command {
        Command::Init(cmd) => cmd.execute(&global),
        Command::Table(cmd) => cmd.execute(&global),
        Command::Book(cmd) => cmd.execute(&global),
        Command::Days(cmd) => cmd.execute(&global),
        Command::Preview(cmd) => cmd.execute(&global),
        Command::Reservations(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
