//! resmio reservation client
//!
//! This library books seats at a restaurant through the resmio REST API.
//! A booking is three sequential requests against the facility resource:
//! resolve the facility's timezone, find the availability slot for the
//! requested local time, and post a booking carrying that slot's checksum.
//!
//! # Modules
//!
//! - `client`: `FacilityApi` transport trait and its HTTP implementation
//! - `services`: the booking workflow and the timezone arithmetic behind it
//! - `models`: wire types for the facility, availability and booking endpoints
//! - `cli`: argument parsing for the `resmio` binary

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
pub mod client_mock;


// Re-export the main API types for ease of use
pub use cli::Cli;
pub use client::{FacilityApi, ResmioHttpClient};
pub use config::ClientConfig;
pub use error::{ReservationError, Result};
pub use models::availability::{AvailabilityRecord, AvailabilitySlot};
pub use models::booking::{BookingRequest, PartyDetails};
pub use services::reservation::ReservationClient;
