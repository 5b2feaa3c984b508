//! Cached event aggregation.
//!
//! Combines the upstream `EventSource` with a `FileStore` holding three JSON
//! cache files, reusing cached enrichment for events that have settled.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use eventdeck_core::api::EventSource;
use eventdeck_core::cache::{
    deserialize_records, serialize_records, FileStore, EVENTS_CACHE, ORGANIZERS_CACHE, VENUES_CACHE,
};
use eventdeck_core::events::{
    attach_display_times, index_by_id, is_settled, Event, Organizer, TicketClass, Venue,
};

use crate::config::Config;
use crate::error::Result;

/// Aggregates a user's events with venue, organizer and ticket enrichment.
///
/// Each `get_events` pass works as follows:
/// - **Settled events**: reused verbatim from the events cache
/// - **Changed or unknown events**: re-enriched from the API
/// - **Cache files**: all three rewritten at the end of the pass
///
/// # Type Parameters
///
/// * `A` - The upstream event source
/// * `S` - The blob store holding the cache files
pub struct EventAggregator<A, S>
where
    A: EventSource,
    S: FileStore,
{
    api: Arc<A>,
    store: Arc<S>,
    config: Config,
}

impl<A, S> EventAggregator<A, S>
where
    A: EventSource,
    S: FileStore,
{
    /// Creates a new aggregator.
    ///
    /// # Arguments
    ///
    /// * `api` - The upstream event source
    /// * `store` - The blob store holding the cache files
    /// * `config` - Credentials, refresh behavior and TTL
    pub fn new(api: Arc<A>, store: Arc<S>, config: Config) -> Self {
        Self { api, store, config }
    }

    /// Returns the user's events keyed by ID, each enriched with its venue,
    /// organizer and ticket classes.
    ///
    /// An event is reused from the events cache only when not forcing a
    /// refresh, its ID is present in the cache, and the time since its last
    /// upstream change exceeds the TTL. Everything else is re-enriched, with
    /// at most one venue and one organizer fetch per distinct ID per pass.
    pub async fn get_events(&self) -> Result<HashMap<String, Event>> {
        let fetched = self
            .api
            .search_events(&self.config.credentials.user_id)
            .await?;
        let mut events = index_by_id(fetched);

        let cached_events: HashMap<String, Event> = self.load_cache(EVENTS_CACHE).await?;
        let cached_venues: HashMap<String, Venue> = self.load_cache(VENUES_CACHE).await?;
        let cached_organizers: HashMap<String, Organizer> =
            self.load_cache(ORGANIZERS_CACHE).await?;

        // The rewritten mappings start from the cached state; records seen
        // during this pass are upserted into them.
        let mut venues = cached_venues.clone();
        let mut organizers = cached_organizers.clone();

        let mut fresh_venues: HashMap<String, Venue> = HashMap::new();
        let mut fresh_organizers: HashMap<String, Organizer> = HashMap::new();

        let now = Utc::now();
        let ttl = self.config.ttl();
        let mut reused = 0usize;

        for event in events.values_mut() {
            match cached_events.get(&event.id) {
                Some(cached)
                    if !self.config.force_refresh && is_settled(event.changed, now, ttl) =>
                {
                    *event = cached.clone();
                    reused += 1;
                }
                _ => {
                    let venue = self
                        .venue_for_event(&event.venue_id, &cached_venues, &mut fresh_venues)
                        .await?;
                    let organizer = self
                        .organizer_for_event(
                            &event.organizer_id,
                            &cached_organizers,
                            &mut fresh_organizers,
                        )
                        .await?;
                    let tickets = self.api.get_ticket_classes(&event.id).await?;

                    event.venue = Some(venue);
                    event.organizer = Some(organizer);
                    event.tickets = Some(tickets);
                    attach_display_times(event);
                }
            }

            // Whichever branch produced the event, its venue and organizer
            // are upserted under the record's own ID.
            if let Some(venue) = &event.venue {
                venues.insert(venue.id.clone(), venue.clone());
            }
            if let Some(organizer) = &event.organizer {
                organizers.insert(organizer.id.clone(), organizer.clone());
            }
        }

        self.put_cache(EVENTS_CACHE, &events).await?;
        self.put_cache(VENUES_CACHE, &venues).await?;
        self.put_cache(ORGANIZERS_CACHE, &organizers).await?;

        tracing::debug!(
            events = events.len(),
            reused,
            enriched = events.len() - reused,
            "Aggregation pass complete"
        );

        Ok(events)
    }

    /// Returns a venue, read from the venue cache unless forcing a refresh.
    ///
    /// The cache file is never written here; only a `get_events` pass
    /// rewrites it.
    pub async fn get_venue(&self, venue_id: &str) -> Result<Venue> {
        if !self.config.force_refresh {
            let mut venues: HashMap<String, Venue> = self.load_cache(VENUES_CACHE).await?;
            if let Some(venue) = venues.remove(venue_id) {
                tracing::trace!(venue_id = %venue_id, "Cache hit for venue");
                return Ok(venue);
            }
        }
        tracing::trace!(venue_id = %venue_id, "Cache miss for venue");
        Ok(self.api.get_venue(venue_id).await?)
    }

    /// Returns an organizer, read from the organizer cache unless forcing a
    /// refresh.
    ///
    /// The cache file is never written here; only a `get_events` pass
    /// rewrites it.
    pub async fn get_organizer(&self, organizer_id: &str) -> Result<Organizer> {
        if !self.config.force_refresh {
            let mut organizers: HashMap<String, Organizer> =
                self.load_cache(ORGANIZERS_CACHE).await?;
            if let Some(organizer) = organizers.remove(organizer_id) {
                tracing::trace!(organizer_id = %organizer_id, "Cache hit for organizer");
                return Ok(organizer);
            }
        }
        tracing::trace!(organizer_id = %organizer_id, "Cache miss for organizer");
        Ok(self.api.get_organizer(organizer_id).await?)
    }

    /// Returns the ticket classes of an event, always fetched from the API.
    pub async fn get_tickets(&self, event_id: &str) -> Result<Vec<TicketClass>> {
        Ok(self.api.get_ticket_classes(event_id).await?)
    }

    /// Resolves the venue for an event being enriched.
    ///
    /// Venues fetched earlier in this pass are reused first, then the venue
    /// cache (unless forcing a refresh), then the API.
    async fn venue_for_event(
        &self,
        venue_id: &str,
        cached: &HashMap<String, Venue>,
        fresh: &mut HashMap<String, Venue>,
    ) -> Result<Venue> {
        if let Some(venue) = fresh.get(venue_id) {
            return Ok(venue.clone());
        }
        if !self.config.force_refresh {
            if let Some(venue) = cached.get(venue_id) {
                tracing::trace!(venue_id = %venue_id, "Cache hit for venue");
                return Ok(venue.clone());
            }
        }
        tracing::trace!(venue_id = %venue_id, "Cache miss for venue");
        let venue = self.api.get_venue(venue_id).await?;
        fresh.insert(venue_id.to_string(), venue.clone());
        Ok(venue)
    }

    /// Resolves the organizer for an event being enriched.
    ///
    /// Organizers fetched earlier in this pass are reused first, then the
    /// organizer cache (unless forcing a refresh), then the API.
    async fn organizer_for_event(
        &self,
        organizer_id: &str,
        cached: &HashMap<String, Organizer>,
        fresh: &mut HashMap<String, Organizer>,
    ) -> Result<Organizer> {
        if let Some(organizer) = fresh.get(organizer_id) {
            return Ok(organizer.clone());
        }
        if !self.config.force_refresh {
            if let Some(organizer) = cached.get(organizer_id) {
                tracing::trace!(organizer_id = %organizer_id, "Cache hit for organizer");
                return Ok(organizer.clone());
            }
        }
        tracing::trace!(organizer_id = %organizer_id, "Cache miss for organizer");
        let organizer = self.api.get_organizer(organizer_id).await?;
        fresh.insert(organizer_id.to_string(), organizer.clone());
        Ok(organizer)
    }

    /// Loads a cache mapping, treating a missing or undecodable file as
    /// empty.
    async fn load_cache<T: DeserializeOwned>(&self, name: &str) -> Result<HashMap<String, T>> {
        if !self.store.has(name).await? {
            return Ok(HashMap::new());
        }
        let bytes = self.store.read(name).await?;
        match deserialize_records(&bytes) {
            Ok(records) => Ok(records),
            Err(err) => {
                tracing::warn!(cache = name, error = %err, "Cache file is undecodable, starting empty");
                Ok(HashMap::new())
            }
        }
    }

    /// Serializes a mapping and replaces the named cache file.
    async fn put_cache<T: Serialize>(
        &self,
        name: &str,
        records: &HashMap<String, T>,
    ) -> Result<()> {
        let bytes = serialize_records(records)?;
        self.store.put(name, &bytes).await?;
        Ok(())
    }
}
