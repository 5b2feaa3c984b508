//! eventdeck_core - shared types and traits for the eventdeck project.

pub mod api;
pub mod cache;
pub mod events;
