pub mod event_attendees;
pub mod event_cohosts;
pub mod events;
