use async_trait::async_trait;

use crate::events::{Event, Organizer, TicketClass, Venue};

use super::Result;

/// Remote source of event data.
///
/// The aggregator talks to the upstream API through this trait; the HTTP
/// implementation lives in `eventdeck_client`.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetches all events belonging to a user.
    async fn search_events(&self, user_id: &str) -> Result<Vec<Event>>;

    /// Fetches a venue by its ID.
    async fn get_venue(&self, venue_id: &str) -> Result<Venue>;

    /// Fetches an organizer by its ID.
    async fn get_organizer(&self, organizer_id: &str) -> Result<Organizer>;

    /// Fetches the ticket classes of an event.
    async fn get_ticket_classes(&self, event_id: &str) -> Result<Vec<TicketClass>>;
}
