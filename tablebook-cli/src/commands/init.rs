//! Init command implementation.

use crate::error::CliError;
use crate::utils::{data_dir, shorten_path, GlobalOptions};
use clap::Args;
use tablebook::operations::{init_database, InitOptions};

/// Initialize the tablebook data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    pub with_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = InitOptions::new(data_dir(global)?)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        let result = init_database(&options)?;

        if global.quiet {
            return Ok(());
        }

        println!("Initialized tablebook in: {}", shorten_path(&result.data_dir));
        if result.data_dir_created {
            println!("  - Created data directory");
        }
        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }
        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
