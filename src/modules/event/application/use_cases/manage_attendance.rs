use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::EventMember;
use crate::modules::event::application::ports::outgoing::event_query::EventQuery;
use crate::modules::event::application::ports::outgoing::membership_repository::{
    MembershipRepository, MembershipRepositoryError,
};

#[derive(Debug)]
pub enum AttendanceError {
    EventNotFound,
    UserNotFound,
    AlreadyAttending,
    AlreadyCohost,
    NotAttending,
    NotCohost,
    NotPermitted,
    StoreError(String),
}

impl fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceError::EventNotFound => write!(f, "Event not found"),
            AttendanceError::UserNotFound => write!(f, "User not found"),
            AttendanceError::AlreadyAttending => write!(f, "Already attending this event."),
            AttendanceError::AlreadyCohost => write!(f, "Already a cohost of this event."),
            AttendanceError::NotAttending => write!(f, "User is not attending this event."),
            AttendanceError::NotCohost => write!(f, "User is not a cohost of this event."),
            AttendanceError::NotPermitted => {
                write!(f, "You do not have permission to perform this action.")
            }
            AttendanceError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for AttendanceError {}

#[async_trait]
pub trait IAttendanceUseCase {
    async fn list_attendees(
        &self,
        event_uuid: Uuid,
        search: Option<String>,
    ) -> Result<Vec<EventMember>, AttendanceError>;

    /// RSVP; the attendee is always the caller.
    async fn join(
        &self,
        caller_uuid: Uuid,
        event_uuid: Uuid,
    ) -> Result<EventMember, AttendanceError>;

    /// Self-removal, or any attendee when the caller is an admin.
    async fn remove_attendee(
        &self,
        caller_uuid: Uuid,
        caller_is_admin: bool,
        event_uuid: Uuid,
        attendee_uuid: Uuid,
    ) -> Result<(), AttendanceError>;

    async fn add_cohost(
        &self,
        event_uuid: Uuid,
        cohost_uuid: Uuid,
    ) -> Result<EventMember, AttendanceError>;

    async fn remove_cohost(
        &self,
        event_uuid: Uuid,
        cohost_uuid: Uuid,
    ) -> Result<(), AttendanceError>;
}

pub struct AttendanceUseCase<Q: EventQuery, R: MembershipRepository> {
    event_query: Arc<Q>,
    membership_repository: Arc<R>,
}

impl<Q: EventQuery, R: MembershipRepository> AttendanceUseCase<Q, R> {
    pub fn new(event_query: Arc<Q>, membership_repository: Arc<R>) -> Self {
        Self {
            event_query,
            membership_repository,
        }
    }

    async fn require_event(&self, event_uuid: Uuid) -> Result<(), AttendanceError> {
        self.event_query
            .host_profile_id(event_uuid)
            .await
            .map_err(|e| AttendanceError::StoreError(e.to_string()))?
            .ok_or(AttendanceError::EventNotFound)?;
        Ok(())
    }

    fn map_attendee_err(e: MembershipRepositoryError) -> AttendanceError {
        match e {
            MembershipRepositoryError::EventNotFound => AttendanceError::EventNotFound,
            MembershipRepositoryError::UserNotFound => AttendanceError::UserNotFound,
            MembershipRepositoryError::Duplicate => AttendanceError::AlreadyAttending,
            MembershipRepositoryError::NotMember => AttendanceError::NotAttending,
            MembershipRepositoryError::DatabaseError(msg) => AttendanceError::StoreError(msg),
        }
    }

    fn map_cohost_err(e: MembershipRepositoryError) -> AttendanceError {
        match e {
            MembershipRepositoryError::EventNotFound => AttendanceError::EventNotFound,
            MembershipRepositoryError::UserNotFound => AttendanceError::UserNotFound,
            MembershipRepositoryError::Duplicate => AttendanceError::AlreadyCohost,
            MembershipRepositoryError::NotMember => AttendanceError::NotCohost,
            MembershipRepositoryError::DatabaseError(msg) => AttendanceError::StoreError(msg),
        }
    }
}

#[async_trait]
impl<Q: EventQuery, R: MembershipRepository> IAttendanceUseCase for AttendanceUseCase<Q, R> {
    async fn list_attendees(
        &self,
        event_uuid: Uuid,
        search: Option<String>,
    ) -> Result<Vec<EventMember>, AttendanceError> {
        self.require_event(event_uuid).await?;
        self.event_query
            .list_attendees(event_uuid, search)
            .await
            .map_err(|e| AttendanceError::StoreError(e.to_string()))
    }

    async fn join(
        &self,
        caller_uuid: Uuid,
        event_uuid: Uuid,
    ) -> Result<EventMember, AttendanceError> {
        self.membership_repository
            .add_attendee(event_uuid, caller_uuid)
            .await
            .map_err(Self::map_attendee_err)
    }

    async fn remove_attendee(
        &self,
        caller_uuid: Uuid,
        caller_is_admin: bool,
        event_uuid: Uuid,
        attendee_uuid: Uuid,
    ) -> Result<(), AttendanceError> {
        if caller_uuid != attendee_uuid && !caller_is_admin {
            return Err(AttendanceError::NotPermitted);
        }
        self.membership_repository
            .remove_attendee(event_uuid, attendee_uuid)
            .await
            .map_err(Self::map_attendee_err)
    }

    async fn add_cohost(
        &self,
        event_uuid: Uuid,
        cohost_uuid: Uuid,
    ) -> Result<EventMember, AttendanceError> {
        self.membership_repository
            .add_cohost(event_uuid, cohost_uuid)
            .await
            .map_err(Self::map_cohost_err)
    }

    async fn remove_cohost(
        &self,
        event_uuid: Uuid,
        cohost_uuid: Uuid,
    ) -> Result<(), AttendanceError> {
        self.membership_repository
            .remove_cohost(event_uuid, cohost_uuid)
            .await
            .map_err(Self::map_cohost_err)
    }
}
