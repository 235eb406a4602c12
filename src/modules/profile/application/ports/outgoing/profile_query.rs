use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    BasicProfile, FreelancerProfile, FreelancerProfileDetail,
};

#[derive(Debug, Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Sort key for profile lists. Username ascending is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileOrdering {
    #[default]
    UsernameAsc,
    UsernameDesc,
}

impl ProfileOrdering {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("-username") => ProfileOrdering::UsernameDesc,
            _ => ProfileOrdering::UsernameAsc,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileListFilter {
    pub search: Option<String>,
    pub ordering: ProfileOrdering,
    pub offset: u64,
    pub limit: u64,
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Search covers username, email, first/last name and, for
    /// freelancers, attached niche names.
    async fn list_freelancers(
        &self,
        filter: ProfileListFilter,
    ) -> Result<Vec<FreelancerProfile>, ProfileQueryError>;

    async fn find_freelancer(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<FreelancerProfileDetail>, ProfileQueryError>;

    /// The surrogate profile id for attachment and portfolio writes.
    async fn freelancer_profile_id(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<i64>, ProfileQueryError>;

    async fn list_admins(
        &self,
        filter: ProfileListFilter,
    ) -> Result<Vec<BasicProfile>, ProfileQueryError>;

    async fn find_admin(&self, user_uuid: Uuid)
        -> Result<Option<BasicProfile>, ProfileQueryError>;

    async fn admin_profile_id(&self, user_uuid: Uuid) -> Result<Option<i64>, ProfileQueryError>;
}
