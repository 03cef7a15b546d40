//! Preview command implementation.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, write_csv, write_json, write_table, GlobalOptions,
    OutputFormat,
};
use clap::Args;
use tablebook::ReservationAllocator;

/// Show booked dates that cannot take a party of the given size.
///
/// This is a coarse estimate assuming a fixed number of chairs per table;
/// a booking may still fail on a date not listed here.
#[derive(Args)]
pub struct PreviewCommand {
    /// Party size
    #[arg(long)]
    pub guests: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl PreviewCommand {
    /// Execute the preview command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let unavailable =
            ReservationAllocator::from_config(&config).test_availability(&db, self.guests)?;

        match self.format {
            OutputFormat::Json => write_json(&unavailable)?,
            OutputFormat::Csv => write_csv(&unavailable)?,
            OutputFormat::Table => {
                let rows: Vec<Vec<String>> = unavailable
                    .iter()
                    .map(|d| {
                        vec![
                            d.date.to_string(),
                            d.remaining_chairs.to_string(),
                            d.free_tables.to_string(),
                        ]
                    })
                    .collect();
                write_table(&["date", "remaining", "free_tables"], &rows)?;
            }
        }
        Ok(())
    }
}
