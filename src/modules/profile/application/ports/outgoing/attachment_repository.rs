use async_trait::async_trait;
use thiserror::Error;

use crate::modules::profile::application::domain::entities::VocabKind;

#[derive(Debug, Error)]
pub enum AttachmentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Outcome of a batch attach/detach. Partial success is by design:
/// rows already written stay written when later ids fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttachmentReport {
    /// Vocabulary names of join rows newly created by this call.
    pub created: Vec<String>,
    /// Per-id messages for ids that could not be processed.
    pub errors: Vec<String>,
}

#[async_trait]
pub trait VocabAttachmentRepository: Send + Sync {
    async fn count_attached(
        &self,
        profile_id: i64,
        kind: VocabKind,
    ) -> Result<u64, AttachmentRepositoryError>;

    /// One transaction over the id list. Missing vocabulary ids are
    /// recorded as errors; existing join rows are left untouched and
    /// NOT reported as created.
    async fn attach_many(
        &self,
        profile_id: i64,
        kind: VocabKind,
        ids: &[i64],
    ) -> Result<AttachmentReport, AttachmentRepositoryError>;

    /// Best-effort deletes; unknown or unattached ids become errors.
    async fn detach_many(
        &self,
        profile_id: i64,
        kind: VocabKind,
        ids: &[i64],
    ) -> Result<AttachmentReport, AttachmentRepositoryError>;
}
