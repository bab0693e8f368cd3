use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use thiserror::Error;
use tracing::debug;

use crate::client::FacilityApi;
use crate::error;
use crate::models::booking::PartyDetails;
use crate::services::reservation::ReservationClient;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// Reserve seats at a resmio facility.
#[derive(Parser, Debug)]
#[command(name = "resmio")]
#[command(version)]
pub struct Cli {
    /// Name of the facility, as used in its resmio URL
    pub facility: String,

    /// The day to order (YYYY-MM-DD or "today")
    #[arg(short, long, default_value = "today")]
    pub day: String,

    /// The time to order (HH:MM)
    #[arg(short, long, default_value = "22:00")]
    pub time: String,

    /// The amount of seats to order
    #[arg(short, long, default_value_t = 2)]
    pub number: u32,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// A comment to send with the order
    #[arg(long, default_value = "")]
    pub comment: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("day should be in format: YYYY-MM-DD")]
    Day,

    #[error("time should be in format: HH:MM")]
    Time,
}

impl Cli {
    /// Combine `--day` and `--time` into the facility-local date/time
    pub fn local_datetime(&self, today: NaiveDate) -> Result<NaiveDateTime, InputError> {
        let day = parse_day(&self.day, today)?;
        let time = parse_time(&self.time)?;
        Ok(day.and_time(time))
    }

    pub fn party(&self) -> PartyDetails {
        PartyDetails {
            number: self.number,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            comment: self.comment.clone(),
        }
    }
}

pub fn parse_day(raw: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    if raw == "today" {
        return Ok(today);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| InputError::Day)
}

pub fn parse_time(raw: &str) -> Result<NaiveTime, InputError> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| InputError::Time)
}

/// What a CLI run ends with: the process exit code and the line to print
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub code: u8,
    pub message: String,
}

impl Outcome {
    fn failure(code: u8, error: impl std::fmt::Display) -> Self {
        Self {
            code,
            message: format!("Error: {}", error),
        }
    }
}

/// Validate the day/time options, then book through the client built by
/// `connect`. Malformed input exits with 2 before any client is created,
/// any workflow error with 1.
pub async fn run<A, F>(cli: &Cli, today: NaiveDate, connect: F) -> Outcome
where
    A: FacilityApi,
    F: FnOnce(&str) -> error::Result<ReservationClient<A>>,
{
    let local = match cli.local_datetime(today) {
        Ok(local) => local,
        Err(e) => return Outcome::failure(EXIT_USAGE, e),
    };

    let client = match connect(&cli.facility) {
        Ok(client) => client,
        Err(e) => return Outcome::failure(EXIT_FAILURE, e),
    };
    debug!("Booking through {} for {}", client, local);

    match client.submit_booking(local, &cli.party()).await {
        Ok(ref_num) => Outcome {
            code: EXIT_SUCCESS,
            message: format!(
                "Your seats have been reserved, your reference number is: {}",
                ref_num
            ),
        },
        Err(e) => {
            debug!("Booking failed: {:?}", e);
            Outcome::failure(EXIT_FAILURE, e)
        }
    }
}
