use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ReservationError, Result};
use crate::models::availability::{AvailabilityList, AvailabilitySlot};
use crate::models::booking::{BookingRequest, BookingResponse};
use crate::models::facility::FacilityInfo;

/// The three resmio endpoints the booking workflow talks to.
#[async_trait]
pub trait FacilityApi {
    /// GET /facility/<name>/
    async fn fetch_facility(&self, facility: &str) -> Result<FacilityInfo>;

    /// GET /facility/<name>/availability?date__gte=<day>
    async fn fetch_availabilities(
        &self,
        facility: &str,
        day: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>>;

    /// POST /facility/<name>/bookings, succeeding only on 201 Created
    async fn create_booking(
        &self,
        facility: &str,
        booking: &BookingRequest,
    ) -> Result<BookingResponse>;
}

/// HTTP client for the resmio v1 API
pub struct ResmioHttpClient {
    client: Client,
    base_url: String,
}

impl ResmioHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    fn facility_url(&self, facility: &str) -> String {
        format!("{}{}/", self.base_url, facility)
    }

    // Read endpoints: the body is parsed whatever the status, so a non-2xx
    // answer shows up as a missing field rather than a dedicated error
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let res = request.send().await?;
        let status = res.status();
        info!("Response from {} received with status: {}", endpoint, status);
        if !status.is_success() {
            warn!("{} returned non-success status {}", endpoint, status);
        }

        let body = res.text().await?;
        serde_json::from_str(&body).map_err(|e| ReservationError::malformed(endpoint, e))
    }
}

#[async_trait]
impl FacilityApi for ResmioHttpClient {
    async fn fetch_facility(&self, facility: &str) -> Result<FacilityInfo> {
        let url = self.facility_url(facility);

        info!("Fetching facility info for {}", facility);
        debug!("API URL: {}", url);

        self.get_json("facility", self.client.get(&url)).await
    }

    async fn fetch_availabilities(
        &self,
        facility: &str,
        day: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>> {
        let url = format!("{}availability", self.facility_url(facility));
        let day = day.format("%Y-%m-%d").to_string();

        info!("Fetching availability for {} from {}", facility, day);
        debug!("API URL: {}?date__gte={}", url, day);

        let request = self.client.get(&url).query(&[("date__gte", day.as_str())]);
        let list: AvailabilityList = self.get_json("availability", request).await?;

        debug!("Received {} availability records", list.objects.len());
        Ok(list.objects)
    }

    async fn create_booking(
        &self,
        facility: &str,
        booking: &BookingRequest,
    ) -> Result<BookingResponse> {
        let url = format!("{}bookings", self.facility_url(facility));

        info!(
            "Creating booking for {} people at {} on {}",
            booking.num, facility, booking.date
        );
        debug!("API URL: {}", url);

        let res = self.client.post(&url).json(booking).send().await?;
        let status = res.status();
        info!("Booking response received with status: {}", status);

        let body = res.text().await?;
        if status != StatusCode::CREATED {
            return Err(ReservationError::BookingRejected {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ReservationError::malformed("bookings", e))
    }
}
