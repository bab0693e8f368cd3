use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::fmt;
use tracing::{debug, info, warn};

use crate::client::{FacilityApi, ResmioHttpClient};
use crate::config::ClientConfig;
use crate::error::{ReservationError, Result};
use crate::models::availability::AvailabilityRecord;
use crate::models::booking::{BookingRequest, PartyDetails};
use crate::services::timezone::{format_utc_instant, local_to_utc, parse_timezone, utc_offset_at};

/// Source of "now" for the timezone offset lookup
pub type Clock = fn() -> DateTime<Utc>;

/// Books seats at a single facility.
///
/// Each call runs the whole chain (timezone, availability, booking) from
/// scratch; nothing fetched is kept between calls.
pub struct ReservationClient<A = ResmioHttpClient> {
    api: A,
    facility: String,
    source: String,
    clock: Clock,
}

impl ReservationClient<ResmioHttpClient> {
    /// Create a client for `facility` talking HTTP to the configured API
    pub fn new(facility: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let api = ResmioHttpClient::new(config)?;
        Ok(Self::with_api(api, facility, config))
    }
}

impl<A: FacilityApi> ReservationClient<A> {
    pub fn with_api(api: A, facility: impl Into<String>, config: &ClientConfig) -> Self {
        Self {
            api,
            facility: facility.into(),
            source: config.source.clone(),
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn facility(&self) -> &str {
        &self.facility
    }

    /// Look up the facility's IANA timezone
    pub async fn resolve_timezone(&self) -> Result<Tz> {
        let info = self.api.fetch_facility(&self.facility).await?;
        debug!("Facility {} reports timezone {}", self.facility, info.timezone);
        parse_timezone(&info.timezone)
    }

    /// Find the slot starting exactly at `local` (facility wall-clock time).
    ///
    /// The offset used for the conversion is the zone's offset at the moment
    /// of the call, not at `local`. Only the first page of the list is
    /// scanned.
    pub async fn find_availability(&self, local: NaiveDateTime) -> Result<AvailabilityRecord> {
        let tz = self.resolve_timezone().await?;
        let offset = utc_offset_at(tz, (self.clock)());
        let utc = local_to_utc(local, offset);
        let wanted = format_utc_instant(utc);

        let slots = self
            .api
            .fetch_availabilities(&self.facility, utc.date())
            .await?;

        match slots.into_iter().find(|slot| slot.is_at(&wanted)) {
            Some(slot) => {
                let record = slot.into_record()?;
                info!(
                    "Found slot {} with {} seats available",
                    record.date, record.available
                );
                Ok(record)
            }
            None => {
                warn!("No availability at {} for {}", wanted, self.facility);
                Err(ReservationError::NotFound { date: wanted })
            }
        }
    }

    /// Reserve seats for `party` at `local` and return the reference number
    pub async fn submit_booking(&self, local: NaiveDateTime, party: &PartyDetails) -> Result<String> {
        let record = self.find_availability(local).await?;

        if record.available < i64::from(party.number) {
            return Err(ReservationError::InsufficientCapacity {
                requested: party.number,
                date: record.date,
            });
        }

        let booking = BookingRequest::for_slot(&record, party, &self.source);
        let response = self.api.create_booking(&self.facility, &booking).await?;
        let ref_num = response.ref_num.to_string();

        info!("Booking confirmed with reference number {}", ref_num);
        Ok(ref_num)
    }
}

impl<A> fmt::Display for ReservationClient<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<ResmioClient v1/{}>", self.facility)
    }
}
