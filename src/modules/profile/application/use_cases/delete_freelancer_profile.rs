use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug)]
pub enum DeleteProfileError {
    NotOwner,
    NotFound,
    StoreError(String),
}

impl fmt::Display for DeleteProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteProfileError::NotOwner => {
                write!(f, "You do not have permission to update this profile")
            }
            DeleteProfileError::NotFound => write!(f, "Profile not found"),
            DeleteProfileError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for DeleteProfileError {}

#[async_trait]
pub trait IDeleteFreelancerProfileUseCase {
    async fn execute(&self, caller_uuid: Uuid, target_uuid: Uuid)
        -> Result<(), DeleteProfileError>;
}

/// Deleting a profile deletes the user; the cascading foreign keys take
/// the profile row and everything hanging off it.
pub struct DeleteFreelancerProfileUseCase<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> DeleteFreelancerProfileUseCase<R> {
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository> IDeleteFreelancerProfileUseCase for DeleteFreelancerProfileUseCase<R> {
    async fn execute(
        &self,
        caller_uuid: Uuid,
        target_uuid: Uuid,
    ) -> Result<(), DeleteProfileError> {
        if caller_uuid != target_uuid {
            return Err(DeleteProfileError::NotOwner);
        }
        self.user_repository
            .delete_by_uuid(target_uuid)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteProfileError::NotFound,
                other => DeleteProfileError::StoreError(other.to_string()),
            })
    }
}
