use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{BasicProfile, BasicProfileChanges};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::modules::profile::application::use_cases::update_freelancer_profile::UpdateProfileError;

#[async_trait]
pub trait IUpdateAdminProfileUseCase {
    async fn execute(
        &self,
        caller_uuid: Uuid,
        target_uuid: Uuid,
        changes: BasicProfileChanges,
    ) -> Result<BasicProfile, UpdateProfileError>;
}

pub struct UpdateAdminProfileUseCase<R: ProfileRepository> {
    profile_repository: Arc<R>,
}

impl<R: ProfileRepository> UpdateAdminProfileUseCase<R> {
    pub fn new(profile_repository: Arc<R>) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R: ProfileRepository> IUpdateAdminProfileUseCase for UpdateAdminProfileUseCase<R> {
    async fn execute(
        &self,
        caller_uuid: Uuid,
        target_uuid: Uuid,
        changes: BasicProfileChanges,
    ) -> Result<BasicProfile, UpdateProfileError> {
        if caller_uuid != target_uuid {
            return Err(UpdateProfileError::NotOwner);
        }
        self.profile_repository
            .update_admin(target_uuid, changes)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
                ProfileRepositoryError::DatabaseError(msg) => UpdateProfileError::StoreError(msg),
            })
    }
}
