//! Names of the cache files the aggregator maintains.

/// Cache file holding the ID-keyed event mapping.
pub const EVENTS_CACHE: &str = "events.json";

/// Cache file holding the ID-keyed venue mapping.
pub const VENUES_CACHE: &str = "venues.json";

/// Cache file holding the ID-keyed organizer mapping.
pub const ORGANIZERS_CACHE: &str = "organizers.json";
