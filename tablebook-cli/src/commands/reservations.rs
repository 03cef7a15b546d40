//! Reservation commands.
//!
//! Contact details are only shown with `--admin`; without it every command
//! prints the public projection.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, write_csv, write_json, write_table, GlobalOptions,
    OutputFormat,
};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use std::io::Write;
use tablebook::{
    AdminReservationView, Audience, PublicReservationView, ReservationId, ReservationOperations,
    ReservationView,
};

/// Column headers for the admin projection.
const ADMIN_HEADERS: [&str; 9] = [
    "id",
    "date",
    "time",
    "guests",
    "name",
    "phone",
    "email",
    "notes",
    "created_at",
];

/// Column headers for the public projection.
const PUBLIC_HEADERS: [&str; 4] = ["id", "date", "time", "guests"];

/// Inspect and delete stored reservations.
#[derive(Args)]
pub struct ReservationsCommand {
    #[command(subcommand)]
    pub action: ReservationsAction,
}

/// Reservation actions.
#[derive(Subcommand)]
pub enum ReservationsAction {
    /// List reservations
    List {
        /// Only reservations on this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Include contact details
        #[arg(long)]
        admin: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table", ignore_case = true)]
        format: OutputFormat,
    },

    /// Show one reservation
    Show {
        /// Reservation id
        #[arg(long)]
        id: ReservationId,

        /// Include contact details
        #[arg(long)]
        admin: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a reservation's record (its tables stay allocated)
    Delete {
        /// Reservation id
        #[arg(long)]
        id: ReservationId,
    },
}

const fn audience(admin: bool) -> Audience {
    if admin {
        Audience::Admin
    } else {
        Audience::Public
    }
}

fn admin_fields(v: &AdminReservationView) -> Vec<String> {
    vec![
        v.reservation_id.to_string(),
        v.date.to_string(),
        v.time.clone(),
        v.guest_count.to_string(),
        v.name.clone(),
        v.phone.clone(),
        v.email.clone().unwrap_or_default(),
        v.notes.clone().unwrap_or_default(),
        v.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]
}

fn public_fields(v: &PublicReservationView) -> Vec<String> {
    vec![
        v.reservation_id.to_string(),
        v.date.to_string(),
        v.time.clone(),
        v.guest_count.to_string(),
    ]
}

fn fields(view: &ReservationView) -> Vec<String> {
    match view {
        ReservationView::Admin(v) => admin_fields(v),
        ReservationView::Public(v) => public_fields(v),
    }
}

const fn headers(admin: bool) -> &'static [&'static str] {
    if admin {
        &ADMIN_HEADERS
    } else {
        &PUBLIC_HEADERS
    }
}

impl ReservationsCommand {
    /// Execute the reservations command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match self.action {
            ReservationsAction::List {
                date,
                admin,
                format,
            } => {
                let views = ReservationOperations::list_reservations(&db, date, audience(admin))?;
                match format {
                    OutputFormat::Json => write_json(&views)?,
                    OutputFormat::Csv => {
                        let mut rows: Vec<Vec<String>> =
                            vec![headers(admin).iter().map(ToString::to_string).collect()];
                        rows.extend(views.iter().map(fields));
                        write_csv(rows)?;
                    }
                    OutputFormat::Table => {
                        let rows: Vec<Vec<String>> = views.iter().map(fields).collect();
                        write_table(headers(admin), &rows)?;
                    }
                }
            }
            ReservationsAction::Show { id, admin, json } => {
                let view = ReservationOperations::get_reservation(&db, id, audience(admin))?;
                if json {
                    write_json(&view)?;
                } else {
                    let stdout = std::io::stdout();
                    let mut handle = stdout.lock();
                    for (name, value) in headers(admin).iter().zip(fields(&view)) {
                        writeln!(handle, "{name}: {value}")?;
                    }
                }
            }
            ReservationsAction::Delete { id } => {
                ReservationOperations::delete_reservation(&mut db, id)?;
                if !global.quiet {
                    println!("Deleted reservation {id}");
                }
            }
        }

        Ok(())
    }
}
