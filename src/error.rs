use thiserror::Error;

/// Errors surfaced by the booking workflow.
///
/// Nothing in the crate retries or swallows these; every failure reaches the
/// caller as-is.
#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("No availability found for {date}")]
    NotFound { date: String },

    #[error("No space available for {requested} people on {date}")]
    InsufficientCapacity { requested: u32, date: String },

    #[error("Server returned non-201 status code: {status}, text was: {body}")]
    BookingRejected { status: u16, body: String },
}

impl ReservationError {
    pub fn malformed(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        ReservationError::MalformedResponse {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReservationError>;
