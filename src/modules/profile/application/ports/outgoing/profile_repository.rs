use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    BasicProfile, BasicProfileChanges, FreelancerProfile, FreelancerProfileChanges,
};

#[derive(Debug, Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Applies only the provided scalar fields; absent fields keep
    /// their stored values.
    async fn update_freelancer(
        &self,
        user_uuid: Uuid,
        changes: FreelancerProfileChanges,
    ) -> Result<FreelancerProfile, ProfileRepositoryError>;

    async fn update_admin(
        &self,
        user_uuid: Uuid,
        changes: BasicProfileChanges,
    ) -> Result<BasicProfile, ProfileRepositoryError>;
}
