//! eventdeck_client - HTTP client for the Eventbrite v3 API.

pub mod client;

pub use client::{EventbriteClient, DEFAULT_BASE_URL};
