mod operations;
mod types;

pub use operations::{attach_display_times, index_by_id, is_settled};
pub use types::{Event, EventTime, Organizer, TicketClass, Venue};
