use std::env;

use chrono::Duration;

use crate::error::{AggregatorError, Result};

/// Default number of seconds since an event's last change before its cached
/// copy is reused.
pub const DEFAULT_TTL_SECONDS: u64 = 1800;

/// API credentials for the aggregator.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Private token sent as the `Authorization: Bearer` header.
    pub token: String,
    /// ID of the user whose events are aggregated.
    pub user_id: String,
}

impl Credentials {
    /// Creates credentials from a token and user ID.
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
        }
    }
}

/// Aggregator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// When true, cached events and cached venue/organizer records are
    /// ignored and every event is re-enriched from the API.
    pub force_refresh: bool,
    /// Seconds since an event's last change before its cached copy is
    /// reused (default: 1800).
    pub ttl_seconds: u64,
}

impl Config {
    /// Creates a configuration with the default TTL and refresh behavior.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            force_refresh: false,
            ttl_seconds: DEFAULT_TTL_SECONDS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTDECK_API_TOKEN` - Private API token (required)
    /// - `EVENTDECK_USER_ID` - User whose events are aggregated (required)
    /// - `EVENTDECK_FORCE_REFRESH` - Set to "1" or "true" to ignore cached records (default: off)
    /// - `EVENTDECK_TTL_SECONDS` - Settle TTL in seconds (default: 1800)
    pub fn from_env() -> Result<Self> {
        let token = env::var("EVENTDECK_API_TOKEN")
            .map_err(|_| AggregatorError::Config("EVENTDECK_API_TOKEN is not set".to_string()))?;
        let user_id = env::var("EVENTDECK_USER_ID")
            .map_err(|_| AggregatorError::Config("EVENTDECK_USER_ID is not set".to_string()))?;

        Ok(Self {
            credentials: Credentials::new(token, user_id),
            force_refresh: env::var("EVENTDECK_FORCE_REFRESH")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            ttl_seconds: env::var("EVENTDECK_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECONDS),
        })
    }

    /// Sets whether cached records are ignored.
    pub fn with_force_refresh(mut self, force_refresh: bool) -> Self {
        self.force_refresh = force_refresh;
        self
    }

    /// Sets the settle TTL in seconds.
    pub fn with_ttl_seconds(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    /// Get the settle TTL as a Duration.
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_seconds as i64)
    }
}
