use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::{Event, EventDetail};
use crate::modules::event::application::ports::outgoing::event_query::{
    EventListFilter, EventQuery,
};
use crate::modules::event::application::ports::outgoing::event_repository::{
    EventChanges, EventRepository, EventRepositoryError, NewEvent,
};
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

const REQUIRED: &str = "This field is required.";

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EventRequest {
    #[serde(default)]
    #[schema(example = "RustConf")]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub starts_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub max_attendance: Option<i32>,
}

impl EventRequest {
    fn validate(self) -> Result<NewEvent, BTreeMap<String, String>> {
        let mut violations = BTreeMap::new();
        let name = self.name.filter(|v| !v.trim().is_empty());
        let location = self.location.filter(|v| !v.trim().is_empty());
        let details = self.details.filter(|v| !v.trim().is_empty());
        if name.is_none() {
            violations.insert("name".to_string(), REQUIRED.to_string());
        }
        if location.is_none() {
            violations.insert("location".to_string(), REQUIRED.to_string());
        }
        if self.starts_at.is_none() {
            violations.insert("starts_at".to_string(), REQUIRED.to_string());
        }
        if details.is_none() {
            violations.insert("details".to_string(), REQUIRED.to_string());
        }
        if !violations.is_empty() {
            return Err(violations);
        }
        Ok(NewEvent {
            name: name.unwrap_or_default(),
            location: location.unwrap_or_default(),
            starts_at: self.starts_at.unwrap_or_default(),
            details: details.unwrap_or_default(),
            price: self.price,
            max_attendance: self.max_attendance,
        })
    }
}

/// Partial update body for an existing event.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EventUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub starts_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub max_attendance: Option<i32>,
}

impl EventUpdateRequest {
    fn into_changes(self) -> EventChanges {
        EventChanges {
            name: self.name,
            location: self.location,
            starts_at: self.starts_at,
            details: self.details,
            price: self.price,
            max_attendance: self.max_attendance,
        }
    }
}

#[derive(Debug)]
pub enum EventError {
    HostProfileMissing,
    NotHost,
    EventNotFound,
    Validation(BTreeMap<String, String>),
    StoreError(String),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventError::HostProfileMissing => write!(f, "Admin profile not found"),
            EventError::NotHost => {
                write!(f, "You do not have permission to modify this event")
            }
            EventError::EventNotFound => write!(f, "Event not found"),
            EventError::Validation(_) => write!(f, "Validation failed"),
            EventError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for EventError {}

#[async_trait]
pub trait IEventsUseCase {
    /// The host is always the caller's admin profile.
    async fn create(&self, caller_uuid: Uuid, request: EventRequest)
        -> Result<Event, EventError>;

    async fn list(&self, filter: EventListFilter) -> Result<Vec<Event>, EventError>;

    async fn get(&self, event_uuid: Uuid) -> Result<EventDetail, EventError>;

    async fn update(
        &self,
        caller_uuid: Uuid,
        event_uuid: Uuid,
        request: EventUpdateRequest,
    ) -> Result<Event, EventError>;

    async fn delete(&self, caller_uuid: Uuid, event_uuid: Uuid) -> Result<(), EventError>;
}

pub struct EventsUseCase<P: ProfileQuery, Q: EventQuery, R: EventRepository> {
    profile_query: Arc<P>,
    event_query: Arc<Q>,
    event_repository: Arc<R>,
}

impl<P: ProfileQuery, Q: EventQuery, R: EventRepository> EventsUseCase<P, Q, R> {
    pub fn new(profile_query: Arc<P>, event_query: Arc<Q>, event_repository: Arc<R>) -> Self {
        Self {
            profile_query,
            event_query,
            event_repository,
        }
    }

    async fn caller_admin_profile(&self, caller_uuid: Uuid) -> Result<i64, EventError> {
        self.profile_query
            .admin_profile_id(caller_uuid)
            .await
            .map_err(|e| EventError::StoreError(e.to_string()))?
            .ok_or(EventError::HostProfileMissing)
    }

    async fn require_host(&self, caller_uuid: Uuid, event_uuid: Uuid) -> Result<(), EventError> {
        let host = self
            .event_query
            .host_profile_id(event_uuid)
            .await
            .map_err(|e| EventError::StoreError(e.to_string()))?
            .ok_or(EventError::EventNotFound)?;
        let caller_profile = self.caller_admin_profile(caller_uuid).await?;
        if caller_profile != host {
            return Err(EventError::NotHost);
        }
        Ok(())
    }

    fn map_repo_err(e: EventRepositoryError) -> EventError {
        match e {
            EventRepositoryError::NotFound => EventError::EventNotFound,
            EventRepositoryError::DatabaseError(msg) => EventError::StoreError(msg),
        }
    }
}

#[async_trait]
impl<P: ProfileQuery, Q: EventQuery, R: EventRepository> IEventsUseCase
    for EventsUseCase<P, Q, R>
{
    async fn create(
        &self,
        caller_uuid: Uuid,
        request: EventRequest,
    ) -> Result<Event, EventError> {
        let host_profile_id = self.caller_admin_profile(caller_uuid).await?;
        let event = request.validate().map_err(EventError::Validation)?;
        self.event_repository
            .create(host_profile_id, event)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn list(&self, filter: EventListFilter) -> Result<Vec<Event>, EventError> {
        self.event_query
            .list(filter)
            .await
            .map_err(|e| EventError::StoreError(e.to_string()))
    }

    async fn get(&self, event_uuid: Uuid) -> Result<EventDetail, EventError> {
        self.event_query
            .find_detail(event_uuid)
            .await
            .map_err(|e| EventError::StoreError(e.to_string()))?
            .ok_or(EventError::EventNotFound)
    }

    async fn update(
        &self,
        caller_uuid: Uuid,
        event_uuid: Uuid,
        request: EventUpdateRequest,
    ) -> Result<Event, EventError> {
        self.require_host(caller_uuid, event_uuid).await?;
        self.event_repository
            .update(event_uuid, request.into_changes())
            .await
            .map_err(Self::map_repo_err)
    }

    async fn delete(&self, caller_uuid: Uuid, event_uuid: Uuid) -> Result<(), EventError> {
        self.require_host(caller_uuid, event_uuid).await?;
        self.event_repository
            .delete(event_uuid)
            .await
            .map_err(Self::map_repo_err)
    }
}
