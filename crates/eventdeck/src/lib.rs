//! eventdeck - cached aggregator for a user's Eventbrite events.
//!
//! Fetches the events a user owns, enriches each with its venue, organizer
//! and ticket classes, and persists the results as JSON cache files through
//! a pluggable blob store.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod store;

pub use aggregator::EventAggregator;
pub use config::{Config, Credentials, DEFAULT_TTL_SECONDS};
pub use error::{AggregatorError, Result};
pub use eventdeck_client::EventbriteClient;
pub use store::{DiskStore, MemoryStore};
