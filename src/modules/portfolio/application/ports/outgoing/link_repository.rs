use async_trait::async_trait;
use thiserror::Error;

use crate::modules::profile::application::domain::entities::ProfileLink;

#[derive(Debug, Error)]
pub enum LinkRepositoryError {
    #[error("Link not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewLink {
    pub name: String,
    pub icon: Option<String>,
    pub url: String,
}

#[async_trait]
pub trait LinkRepository: Send + Sync {
    async fn create(
        &self,
        profile_id: i64,
        link: NewLink,
    ) -> Result<ProfileLink, LinkRepositoryError>;

    /// Scoped to the profile; an id belonging to someone else's profile
    /// reads as not found.
    async fn update(
        &self,
        profile_id: i64,
        link_id: i64,
        link: NewLink,
    ) -> Result<ProfileLink, LinkRepositoryError>;

    async fn delete(&self, profile_id: i64, link_id: i64) -> Result<(), LinkRepositoryError>;
}
