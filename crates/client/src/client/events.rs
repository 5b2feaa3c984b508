//! Event API operations.

use serde::Deserialize;

use eventdeck_core::api::Result;
use eventdeck_core::events::{Event, TicketClass};

use super::{map_reqwest_error, EventbriteClient};

/// Response wrapper for the event search endpoint.
#[derive(Debug, Deserialize)]
struct EventSearchResponse {
    events: Vec<Event>,
}

/// Response wrapper for the ticket class listing endpoint.
#[derive(Debug, Deserialize)]
struct TicketClassesResponse {
    ticket_classes: Vec<TicketClass>,
}

impl EventbriteClient {
    /// Fetch all events belonging to a user.
    pub async fn search_events(&self, user_id: &str) -> Result<Vec<Event>> {
        let response = self
            .client
            .get(self.url("/events/search"))
            .query(&[("user.id", user_id)])
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: EventSearchResponse = self.handle_response(response, "Events", user_id).await?;
        Ok(body.events)
    }

    /// Fetch the ticket classes of an event.
    pub async fn get_ticket_classes(&self, event_id: &str) -> Result<Vec<TicketClass>> {
        let response = self
            .client
            .get(self.url(&format!("/events/{}/ticket_classes", event_id)))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: TicketClassesResponse = self.handle_response(response, "Event", event_id).await?;
        Ok(body.ticket_classes)
    }
}
