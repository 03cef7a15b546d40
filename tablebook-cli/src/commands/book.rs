//! Book command implementation.

use crate::error::CliError;
use crate::utils::{join_table_ids, load_configuration, open_database, GlobalOptions};
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use tablebook::reservation::TIME_FORMAT;
use tablebook::{BookingRequest, Contact, ReservationAllocator};

/// Book tables for a party.
///
/// Prints the reservation id, then the allocated table ids on a second
/// line separated by spaces.
#[derive(Args)]
pub struct BookCommand {
    /// Booking date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: NaiveDate,

    /// Arrival time (HH:MM)
    #[arg(long, value_name = "TIME", value_parser = parse_time)]
    pub time: NaiveTime,

    /// Party size
    #[arg(long)]
    pub guests: u32,

    /// Guest name
    #[arg(long)]
    pub name: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

pub(crate) fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|e| format!("expected HH:MM: {e}"))
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let contact = Contact::new(self.name, self.phone)
            .with_email(self.email)
            .with_notes(self.notes);
        let request = BookingRequest::new(self.date, self.time, self.guests, contact);

        let booking = ReservationAllocator::from_config(&config).book(&mut db, &request)?;

        println!("{}", booking.reservation_id);
        println!("{}", join_table_ids(&booking.allocated_tables, " "));
        Ok(())
    }
}
