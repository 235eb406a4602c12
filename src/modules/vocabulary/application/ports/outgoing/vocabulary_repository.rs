use async_trait::async_trait;
use thiserror::Error;

use crate::modules::profile::application::domain::entities::{VocabItem, VocabKind};

#[derive(Debug, Error)]
pub enum VocabularyRepositoryError {
    #[error("Name already exists")]
    NameTaken,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    /// Inserts a vocabulary row; the unique name constraint decides
    /// duplicates, not a pre-check.
    async fn create(
        &self,
        kind: VocabKind,
        name: String,
    ) -> Result<VocabItem, VocabularyRepositoryError>;
}
