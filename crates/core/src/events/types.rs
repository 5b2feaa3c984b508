use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A start or end timestamp of an event.
///
/// `timezone`, `local` and `utc` are kept exactly as the API returns them.
/// `local_with_timezone` is the derived display string attached during
/// enrichment; it is absent on records fresh from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTime {
    pub timezone: String,
    pub local: String,
    pub utc: String,
    #[serde(
        rename = "localWithTimezone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub local_with_timezone: Option<String>,
}

impl EventTime {
    /// Creates a new timestamp with the given timezone, local and UTC values.
    pub fn new(
        timezone: impl Into<String>,
        local: impl Into<String>,
        utc: impl Into<String>,
    ) -> Self {
        Self {
            timezone: timezone.into(),
            local: local.into(),
            utc: utc.into(),
            local_with_timezone: None,
        }
    }
}

/// An event as returned by the search endpoint, enriched in place by the
/// aggregator.
///
/// Only the fields the aggregator interprets are modeled; everything else the
/// API returns is preserved verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// When the event last changed upstream.
    pub changed: DateTime<Utc>,
    pub start: EventTime,
    pub end: EventTime,
    pub venue_id: String,
    pub organizer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<Organizer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<TicketClass>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Creates a new event with the given identifiers and timestamps.
    pub fn new(
        id: impl Into<String>,
        venue_id: impl Into<String>,
        organizer_id: impl Into<String>,
        changed: DateTime<Utc>,
        start: EventTime,
        end: EventTime,
    ) -> Self {
        Self {
            id: id.into(),
            changed,
            start,
            end,
            venue_id: venue_id.into(),
            organizer_id: organizer_id.into(),
            venue: None,
            organizer: None,
            tickets: None,
            extra: Map::new(),
        }
    }

    /// Sets an extra payload field on this event (useful for testing).
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// A venue record. Beyond its identifier the payload is opaque and preserved
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Venue {
    /// Creates a new venue with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }

    /// Sets an extra payload field on this venue (useful for testing).
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// An organizer record. Beyond its identifier the payload is opaque and
/// preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Organizer {
    /// Creates a new organizer with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }

    /// Sets an extra payload field on this organizer (useful for testing).
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// A ticket class of an event. Beyond its identifier the payload is opaque
/// and preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketClass {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TicketClass {
    /// Creates a new ticket class with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }

    /// Sets an extra payload field on this ticket class (useful for testing).
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
