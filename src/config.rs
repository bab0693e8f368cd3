use dotenv::dotenv;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://app.resmio.com/v1/facility/";
pub const DEFAULT_SOURCE: &str = "localhost";

/// Immutable settings for talking to the resmio API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Facility collection URL, always ending in `/`.
    pub base_url: String,
    /// Value sent as `source` in every booking.
    pub source: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build a config pointing at a different API root, e.g. a local test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        dotenv().ok();

        let base_url = base_url_or_default(env::var("RESMIO_API_URL").ok());

        let source = env::var("RESMIO_BOOKING_SOURCE")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

        let timeout = env::var("RESMIO_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| parse_timeout(&raw));

        debug!("Using resmio API at {}", base_url);

        Self {
            base_url,
            source,
            timeout,
        }
    }
}

// An empty or blank value counts as unset
fn base_url_or_default(raw: Option<String>) -> String {
    raw.map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .map(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            warn!("Ignoring invalid RESMIO_TIMEOUT_SECS value: {}", raw);
            None
        }
    }
}
