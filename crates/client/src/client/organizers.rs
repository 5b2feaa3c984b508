//! Organizer API operations.

use eventdeck_core::api::Result;
use eventdeck_core::events::Organizer;

use super::{map_reqwest_error, EventbriteClient};

impl EventbriteClient {
    /// Fetch an organizer by its ID.
    pub async fn get_organizer(&self, organizer_id: &str) -> Result<Organizer> {
        let response = self
            .client
            .get(self.url(&format!("/organizers/{}", organizer_id)))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.handle_response(response, "Organizer", organizer_id)
            .await
    }
}
