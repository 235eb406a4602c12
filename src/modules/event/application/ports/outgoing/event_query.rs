use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::{Event, EventDetail, EventMember};

#[derive(Debug, Error)]
pub enum EventQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Django-style ordering strings; default is soonest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventOrdering {
    #[default]
    StartsAtAsc,
    StartsAtDesc,
    NameAsc,
    NameDesc,
    LocationAsc,
    LocationDesc,
}

impl EventOrdering {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("-starts_at") => EventOrdering::StartsAtDesc,
            Some("name") => EventOrdering::NameAsc,
            Some("-name") => EventOrdering::NameDesc,
            Some("location") => EventOrdering::LocationAsc,
            Some("-location") => EventOrdering::LocationDesc,
            _ => EventOrdering::StartsAtAsc,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventListFilter {
    pub search: Option<String>,
    pub ordering: EventOrdering,
    pub offset: u64,
    pub limit: u64,
}

#[async_trait]
pub trait EventQuery: Send + Sync {
    async fn list(&self, filter: EventListFilter) -> Result<Vec<Event>, EventQueryError>;

    async fn find_detail(&self, event_uuid: Uuid) -> Result<Option<EventDetail>, EventQueryError>;

    async fn host_profile_id(&self, event_uuid: Uuid) -> Result<Option<i64>, EventQueryError>;

    /// Attendees with their user rows; `search` matches username or email.
    async fn list_attendees(
        &self,
        event_uuid: Uuid,
        search: Option<String>,
    ) -> Result<Vec<EventMember>, EventQueryError>;
}
