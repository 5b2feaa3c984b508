//! Pure functions for serializing/deserializing cache mappings to/from bytes.
//!
//! Cache files are JSON objects keyed by record ID, providing human-readable
//! cache contents that are easy to debug and inspect.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes an ID-keyed record mapping to JSON bytes.
///
/// # Arguments
/// * `records` - The mapping to serialize
///
/// # Returns
/// JSON-encoded bytes representing the mapping object
pub fn serialize_records<T: Serialize>(records: &HashMap<String, T>) -> Result<Vec<u8>> {
    serde_json::to_vec(records).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to an ID-keyed record mapping.
///
/// # Arguments
/// * `bytes` - JSON-encoded bytes
///
/// # Returns
/// The deserialized mapping
pub fn deserialize_records<T: DeserializeOwned>(bytes: &[u8]) -> Result<HashMap<String, T>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::events::{Event, EventTime, Venue};

    fn fixed_timestamp() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }

    fn test_event(id: &str) -> Event {
        Event::new(
            id,
            "venue-1",
            "organizer-1",
            fixed_timestamp(),
            EventTime::new(
                "America/New_York",
                "2024-06-20T19:00:00",
                "2024-06-20T23:00:00Z",
            ),
            EventTime::new(
                "America/New_York",
                "2024-06-20T22:00:00",
                "2024-06-21T02:00:00Z",
            ),
        )
    }

    #[test]
    fn test_roundtrip_event_mapping() {
        let mut records = HashMap::new();
        records.insert("11111".to_string(), test_event("11111"));
        records.insert("22222".to_string(), test_event("22222"));

        let bytes = serialize_records(&records).expect("serialize should succeed");
        let deserialized: HashMap<String, Event> =
            deserialize_records(&bytes).expect("deserialize should succeed");

        assert_eq!(records, deserialized);
    }

    #[test]
    fn test_roundtrip_venue_mapping() {
        let mut records = HashMap::new();
        records.insert(
            "33333".to_string(),
            Venue::new("33333").with_field("name", json!("The Fillmore")),
        );

        let bytes = serialize_records(&records).expect("serialize should succeed");
        let deserialized: HashMap<String, Venue> =
            deserialize_records(&bytes).expect("deserialize should succeed");

        assert_eq!(records, deserialized);
    }

    #[test]
    fn test_empty_mapping_serializes_to_empty_object() {
        let records: HashMap<String, Venue> = HashMap::new();

        let bytes = serialize_records(&records).expect("serialize should succeed");

        assert_eq!(bytes, b"{}");
    }

    #[test]
    fn test_deserialize_malformed_bytes() {
        let malformed = b"not valid json";
        let result: Result<HashMap<String, Venue>> = deserialize_records(malformed);

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, SerializationError::DeserializeFailed(_)));
    }

    #[test]
    fn test_deserialize_wrong_shape() {
        let malformed = b"[1, 2, 3]";
        let result: Result<HashMap<String, Venue>> = deserialize_records(malformed);

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }
}
