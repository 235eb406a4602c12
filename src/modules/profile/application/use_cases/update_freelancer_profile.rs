use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    FreelancerProfile, FreelancerProfileChanges,
};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError,
};

#[derive(Debug)]
pub enum UpdateProfileError {
    NotOwner,
    NotFound,
    StoreError(String),
}

impl fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProfileError::NotOwner => {
                write!(f, "You do not have permission to update this profile")
            }
            UpdateProfileError::NotFound => write!(f, "Profile not found"),
            UpdateProfileError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for UpdateProfileError {}

#[async_trait]
pub trait IUpdateFreelancerProfileUseCase {
    /// Only the owning user may update; callers are matched on uuid.
    async fn execute(
        &self,
        caller_uuid: Uuid,
        target_uuid: Uuid,
        changes: FreelancerProfileChanges,
    ) -> Result<FreelancerProfile, UpdateProfileError>;
}

pub struct UpdateFreelancerProfileUseCase<R: ProfileRepository> {
    profile_repository: Arc<R>,
}

impl<R: ProfileRepository> UpdateFreelancerProfileUseCase<R> {
    pub fn new(profile_repository: Arc<R>) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R: ProfileRepository> IUpdateFreelancerProfileUseCase for UpdateFreelancerProfileUseCase<R> {
    async fn execute(
        &self,
        caller_uuid: Uuid,
        target_uuid: Uuid,
        changes: FreelancerProfileChanges,
    ) -> Result<FreelancerProfile, UpdateProfileError> {
        if caller_uuid != target_uuid {
            return Err(UpdateProfileError::NotOwner);
        }
        self.profile_repository
            .update_freelancer(target_uuid, changes)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
                ProfileRepositoryError::DatabaseError(msg) => UpdateProfileError::StoreError(msg),
            })
    }
}
