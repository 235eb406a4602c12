use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::EventMember;

#[derive(Debug, Error)]
pub enum MembershipRepositoryError {
    #[error("Event not found")]
    EventNotFound,
    #[error("User not found")]
    UserNotFound,
    #[error("Already a member")]
    Duplicate,
    #[error("Not a member")]
    NotMember,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Attendee and cohost join rows. Both tables enforce one row per
/// (event, user) pair; a second insert maps to `Duplicate`.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn add_attendee(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<EventMember, MembershipRepositoryError>;

    async fn remove_attendee(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<(), MembershipRepositoryError>;

    async fn add_cohost(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<EventMember, MembershipRepositoryError>;

    async fn remove_cohost(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<(), MembershipRepositoryError>;
}
