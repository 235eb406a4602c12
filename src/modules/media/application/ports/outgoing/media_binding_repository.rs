use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::media::application::ports::outgoing::media_store::StoredMedia;

#[derive(Debug, Error)]
pub enum MediaBindingError {
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Project not found")]
    ProjectNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The media currently bound to a row. `public_id` may be absent for
/// rows written before the host handle was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub url: String,
    pub public_id: Option<String>,
}

/// Persists which stored object a profile or project points at. The
/// object itself lives on the media host; these are just the columns
/// next to the owning row.
#[async_trait]
pub trait MediaBindingRepository: Send + Sync {
    async fn find_profile_picture(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<MediaRef>, MediaBindingError>;

    /// `None` clears both columns.
    async fn set_profile_picture(
        &self,
        user_uuid: Uuid,
        media: Option<StoredMedia>,
    ) -> Result<(), MediaBindingError>;

    async fn find_resume(&self, user_uuid: Uuid) -> Result<Option<MediaRef>, MediaBindingError>;

    async fn set_resume(
        &self,
        user_uuid: Uuid,
        media: Option<StoredMedia>,
    ) -> Result<(), MediaBindingError>;

    /// Project lookups are scoped to the owning profile; a foreign
    /// project id reads as missing.
    async fn find_project_cover(
        &self,
        profile_id: i64,
        project_id: i64,
    ) -> Result<Option<MediaRef>, MediaBindingError>;

    async fn set_project_cover(
        &self,
        profile_id: i64,
        project_id: i64,
        media: Option<StoredMedia>,
    ) -> Result<(), MediaBindingError>;
}
