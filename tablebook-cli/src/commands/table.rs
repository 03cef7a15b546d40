//! Table inventory commands.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, write_csv, write_json, write_table, GlobalOptions,
    OutputFormat,
};
use clap::{Args, Subcommand};
use serde::Serialize;
use tablebook::{Chairs, InventoryOperations, TableId};

/// Manage the dining table inventory.
#[derive(Args)]
pub struct TableCommand {
    #[command(subcommand)]
    pub action: TableAction,
}

/// Table inventory actions.
#[derive(Subcommand)]
pub enum TableAction {
    /// Add a table
    Add {
        /// Number of chairs at the table (1 to 100)
        #[arg(long, value_parser = parse_chairs)]
        chairs: Chairs,
    },

    /// Remove a table that no booking holds
    Remove {
        /// Table id
        #[arg(long)]
        id: u32,
    },

    /// List all tables
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table", ignore_case = true)]
        format: OutputFormat,
    },
}

#[derive(Serialize)]
struct TableRow {
    id: u32,
    chairs: u32,
}

fn parse_chairs(s: &str) -> Result<Chairs, String> {
    let n: u32 = s.parse().map_err(|e| format!("{e}"))?;
    Chairs::try_from(n).map_err(|e| e.to_string())
}

impl TableCommand {
    /// Execute the table command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match self.action {
            TableAction::Add { chairs } => {
                let table = InventoryOperations::add_table(&mut db, chairs)?;
                println!("{}", table.id);
            }
            TableAction::Remove { id } => {
                let table = InventoryOperations::remove_table(&mut db, TableId::new(id))?;
                if !global.quiet {
                    println!("Removed table {} ({} chairs)", table.id, table.chairs);
                }
            }
            TableAction::List { format } => {
                let rows: Vec<TableRow> = InventoryOperations::list_tables(&db)?
                    .into_iter()
                    .map(|t| TableRow {
                        id: t.id.value(),
                        chairs: t.chairs.value(),
                    })
                    .collect();
                match format {
                    OutputFormat::Table => {
                        let lines: Vec<Vec<String>> = rows
                            .iter()
                            .map(|r| vec![r.id.to_string(), r.chairs.to_string()])
                            .collect();
                        write_table(&["id", "chairs"], &lines)?;
                    }
                    OutputFormat::Json => write_json(&rows)?,
                    OutputFormat::Csv => write_csv(rows)?,
                }
            }
        }

        Ok(())
    }
}
