pub mod attendees;
pub mod cohosts;
pub mod events;

pub use attendees::{join_event_handler, list_attendees_handler, remove_attendee_handler};
pub use cohosts::{add_cohost_handler, remove_cohost_handler};
pub use events::{
    create_event_handler, delete_event_handler, get_event_handler, list_events_handler,
    update_event_handler,
};
