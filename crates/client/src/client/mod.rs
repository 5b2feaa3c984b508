//! HTTP client for the Eventbrite v3 API.

pub mod events;
pub mod organizers;
pub mod venues;

use async_trait::async_trait;

use eventdeck_core::api::{ApiError, EventSource, Result};
use eventdeck_core::events::{Event, Organizer, TicketClass, Venue};

/// Default base URL of the Eventbrite v3 API.
pub const DEFAULT_BASE_URL: &str = "https://www.eventbriteapi.com/v3";

/// HTTP client for the Eventbrite v3 API.
///
/// Every request carries the private token in an `Authorization: Bearer`
/// header.
#[derive(Debug, Clone)]
pub struct EventbriteClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl EventbriteClient {
    /// Create a new client for the default API host with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Create a new client against a specific base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &'static str,
        id: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(map_reqwest_error)
        } else if status.as_u16() == 404 {
            Err(ApiError::NotFound {
                resource,
                id: id.to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Maps a reqwest error to the transport-agnostic API error.
fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

#[async_trait]
impl EventSource for EventbriteClient {
    async fn search_events(&self, user_id: &str) -> Result<Vec<Event>> {
        EventbriteClient::search_events(self, user_id).await
    }

    async fn get_venue(&self, venue_id: &str) -> Result<Venue> {
        EventbriteClient::get_venue(self, venue_id).await
    }

    async fn get_organizer(&self, organizer_id: &str) -> Result<Organizer> {
        EventbriteClient::get_organizer(self, organizer_id).await
    }

    async fn get_ticket_classes(&self, event_id: &str) -> Result<Vec<TicketClass>> {
        EventbriteClient::get_ticket_classes(self, event_id).await
    }
}
