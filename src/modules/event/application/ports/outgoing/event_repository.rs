use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;

#[derive(Debug, Error)]
pub enum EventRepositoryError {
    #[error("Event not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub location: String,
    pub starts_at: DateTime<FixedOffset>,
    pub details: String,
    pub price: Option<Decimal>,
    pub max_attendance: Option<i32>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<DateTime<FixedOffset>>,
    pub details: Option<String>,
    pub price: Option<Decimal>,
    pub max_attendance: Option<i32>,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// The uuid is generated here, never taken from the caller.
    async fn create(
        &self,
        host_profile_id: i64,
        event: NewEvent,
    ) -> Result<Event, EventRepositoryError>;

    async fn update(
        &self,
        event_uuid: Uuid,
        changes: EventChanges,
    ) -> Result<Event, EventRepositoryError>;

    async fn delete(&self, event_uuid: Uuid) -> Result<(), EventRepositoryError>;
}
