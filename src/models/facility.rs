use serde::Deserialize;

// Facility info returned by GET /facility/<name>/; only the timezone is used
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityInfo {
    pub timezone: String,
}
