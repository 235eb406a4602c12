use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaStoreError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

/// An object as stored on the media host. `public_id` is the host-side
/// handle needed to delete the object later; `secure_url` is what
/// clients fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    pub public_id: String,
    pub secure_url: String,
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores the bytes under a fresh object name inside `folder`.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        folder: &str,
    ) -> Result<StoredMedia, MediaStoreError>;

    async fn delete(&self, public_id: &str) -> Result<(), MediaStoreError>;
}
