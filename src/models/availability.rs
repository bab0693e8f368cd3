use serde::Deserialize;

use crate::error::{ReservationError, Result};

/// One bookable slot as reported by the availability endpoint.
///
/// `checksum` is the server's proof that `available` seats were verified for
/// exactly this `date`; it is only ever sent back together with that date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRecord {
    pub date: String,
    pub available: i64,
    pub checksum: String,
}

/// A slot as listed by the server, before it has been matched.
///
/// Fully booked or otherwise odd slots may come with null or missing fields,
/// so nothing is required until the slot is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AvailabilitySlot {
    pub date: Option<String>,
    pub available: Option<i64>,
    pub checksum: Option<String>,
}

impl AvailabilitySlot {
    pub fn is_at(&self, date: &str) -> bool {
        self.date.as_deref() == Some(date)
    }

    /// Turn the matched slot into a record, requiring the fields a booking needs
    pub fn into_record(self) -> Result<AvailabilityRecord> {
        let date = self
            .date
            .ok_or_else(|| ReservationError::malformed("availability", "slot without `date`"))?;
        let available = self.available.ok_or_else(|| {
            ReservationError::malformed("availability", format!("slot {} has no `available`", date))
        })?;
        let checksum = self.checksum.ok_or_else(|| {
            ReservationError::malformed("availability", format!("slot {} has no `checksum`", date))
        })?;

        Ok(AvailabilityRecord {
            date,
            available,
            checksum,
        })
    }
}

// Response envelope for GET /facility/<name>/availability
#[derive(Debug, Deserialize)]
pub struct AvailabilityList {
    pub objects: Vec<AvailabilitySlot>,
}
