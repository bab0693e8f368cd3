use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use std::sync::{Arc, Mutex};

use crate::client::FacilityApi;
use crate::error::Result;
use crate::models::availability::AvailabilitySlot;
use crate::models::booking::{BookingRequest, BookingResponse, ReferenceNumber};
use crate::models::facility::FacilityInfo;

// Define a mock for the resmio API
mock! {
    pub Resmio {}

    #[async_trait]
    impl FacilityApi for Resmio {
        async fn fetch_facility(&self, facility: &str) -> Result<FacilityInfo>;

        async fn fetch_availabilities(
            &self,
            facility: &str,
            day: NaiveDate,
        ) -> Result<Vec<AvailabilitySlot>>;

        async fn create_booking(
            &self,
            facility: &str,
            booking: &BookingRequest,
        ) -> Result<BookingResponse>;
    }
}

// Records what the workflow sent to the mock
pub struct MockRecorder {
    requested_days: Mutex<Vec<NaiveDate>>,
    bookings: Mutex<Vec<BookingRequest>>,
}

impl MockRecorder {
    pub fn new() -> Self {
        Self {
            requested_days: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
        }
    }

    pub fn record_day(&self, day: NaiveDate) {
        self.requested_days.lock().unwrap().push(day);
    }

    pub fn record_booking(&self, booking: BookingRequest) {
        self.bookings.lock().unwrap().push(booking);
    }

    pub fn requested_days(&self) -> Vec<NaiveDate> {
        self.requested_days.lock().unwrap().clone()
    }

    pub fn bookings(&self) -> Vec<BookingRequest> {
        self.bookings.lock().unwrap().clone()
    }
}

pub fn slot(date: &str, available: i64, checksum: &str) -> AvailabilitySlot {
    AvailabilitySlot {
        date: Some(date.to_string()),
        available: Some(available),
        checksum: Some(checksum.to_string()),
    }
}

// A slot as the server lists a fully booked time: no capacity, null checksum
pub fn booked_out_slot(date: &str) -> AvailabilitySlot {
    AvailabilitySlot {
        date: Some(date.to_string()),
        available: Some(0),
        checksum: None,
    }
}

// Set up a mock answering the facility and availability calls and accepting
// every booking with reference number "R-0001"
pub fn setup_mock_api(
    timezone: &str,
    records: Vec<AvailabilitySlot>,
) -> (MockResmio, Arc<MockRecorder>) {
    let recorder = Arc::new(MockRecorder::new());
    let mut mock_api = MockResmio::new();

    let timezone = timezone.to_string();
    mock_api.expect_fetch_facility().returning(move |_| {
        Ok(FacilityInfo {
            timezone: timezone.clone(),
        })
    });

    let recorder_ref1 = Arc::clone(&recorder);
    mock_api
        .expect_fetch_availabilities()
        .returning(move |_, day| {
            recorder_ref1.record_day(day);
            Ok(records.clone())
        });

    let recorder_ref2 = Arc::clone(&recorder);
    mock_api
        .expect_create_booking()
        .returning(move |_, booking| {
            recorder_ref2.record_booking(booking.clone());
            Ok(BookingResponse {
                ref_num: ReferenceNumber::Text("R-0001".to_string()),
            })
        });

    (mock_api, recorder)
}
