//! Venue API operations.

use eventdeck_core::api::Result;
use eventdeck_core::events::Venue;

use super::{map_reqwest_error, EventbriteClient};

impl EventbriteClient {
    /// Fetch a venue by its ID.
    pub async fn get_venue(&self, venue_id: &str) -> Result<Venue> {
        let response = self
            .client
            .get(self.url(&format!("/venues/{}", venue_id)))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.handle_response(response, "Venue", venue_id).await
    }
}
