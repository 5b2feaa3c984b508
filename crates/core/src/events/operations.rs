use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use super::types::{Event, EventTime};

/// Indexes events by their ID.
/// When two events share an ID, the later one wins.
pub fn index_by_id(events: Vec<Event>) -> HashMap<String, Event> {
    events
        .into_iter()
        .map(|event| (event.id.clone(), event))
        .collect()
}

/// Returns true if an event has settled: the time elapsed since its last
/// upstream change strictly exceeds `ttl`.
///
/// Settled events are stable enough for their cached copy to be reused;
/// recently changed events are always re-enriched.
pub fn is_settled(changed: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
    now.signed_duration_since(changed) > ttl
}

/// Attaches the combined local-time-and-timezone display string to both
/// timestamps of an event.
pub fn attach_display_times(event: &mut Event) {
    event.start.local_with_timezone = Some(display_time(&event.start));
    event.end.local_with_timezone = Some(display_time(&event.end));
}

fn display_time(time: &EventTime) -> String {
    format!("{} {}", time.local, time.timezone)
}
