pub mod manage_attendance;
pub mod manage_events;

#[cfg(test)]
pub mod mocks;
