mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{Result, StoreError};
pub use keys::{EVENTS_CACHE, ORGANIZERS_CACHE, VENUES_CACHE};
pub use serialization::{deserialize_records, serialize_records, SerializationError};
pub use traits::FileStore;
