//! Days command implementation.

use crate::error::CliError;
use crate::utils::{
    join_table_ids, load_configuration, open_database, write_csv, write_json, write_table,
    GlobalOptions, OutputFormat,
};
use clap::Args;
use serde::Serialize;
use tablebook::ReservationAllocator;

/// Show every booked date with its remaining capacity.
#[derive(Args)]
pub struct DaysCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct DayRow {
    date: String,
    remaining_chairs: u32,
    allocated_tables: String,
    status: String,
}

impl DaysCommand {
    /// Execute the days command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let days = ReservationAllocator::from_config(&config).available_days(&db)?;

        match self.format {
            OutputFormat::Json => write_json(&days)?,
            OutputFormat::Csv => write_csv(days.iter().map(|d| DayRow {
                date: d.date.to_string(),
                remaining_chairs: d.remaining_chairs,
                allocated_tables: join_table_ids(&d.allocated_tables, " "),
                status: d.status.to_string(),
            }))?,
            OutputFormat::Table => {
                let rows: Vec<Vec<String>> = days
                    .iter()
                    .map(|d| {
                        vec![
                            d.date.to_string(),
                            d.remaining_chairs.to_string(),
                            join_table_ids(&d.allocated_tables, ","),
                            d.status.to_string(),
                        ]
                    })
                    .collect();
                write_table(&["date", "remaining", "tables", "status"], &rows)?;
            }
        }
        Ok(())
    }
}
