use serde::{Deserialize, Serialize};

use crate::models::availability::AvailabilityRecord;

/// Who is booking and for how many people.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyDetails {
    pub number: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub comment: String,
}

impl Default for PartyDetails {
    fn default() -> Self {
        Self {
            number: 2,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            comment: String::new(),
        }
    }
}

impl PartyDetails {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }
}

/// Body of POST /facility/<name>/bookings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub comment: String,
    pub email: String,
    pub facility_resources: Vec<String>,
    pub name: String,
    pub newsletter_subscribe: bool,
    pub price_change: i64,
    pub num: u32,
    pub phone: String,
    pub source: String,
    pub date: String,
    pub checksum: String,
}

impl BookingRequest {
    /// Build a booking against `record`. `date` and `checksum` always come
    /// from the same record.
    pub fn for_slot(record: &AvailabilityRecord, party: &PartyDetails, source: &str) -> Self {
        Self {
            comment: party.comment.clone(),
            email: party.email.clone(),
            facility_resources: Vec::new(),
            name: party.name.clone(),
            newsletter_subscribe: false,
            price_change: 0,
            num: party.number,
            phone: party.phone.clone(),
            source: source.to_string(),
            date: record.date.clone(),
            checksum: record.checksum.clone(),
        }
    }
}

// ref_num may arrive as a JSON string or a number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReferenceNumber {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceNumber::Text(s) => f.write_str(s),
            ReferenceNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingResponse {
    pub ref_num: ReferenceNumber,
}
