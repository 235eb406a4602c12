use async_trait::async_trait;
use thiserror::Error;

use crate::modules::profile::application::domain::entities::{VocabItem, VocabKind};

#[derive(Debug, Error)]
pub enum VocabularyQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VocabOrdering {
    #[default]
    NameAsc,
    NameDesc,
}

impl VocabOrdering {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("-name") => VocabOrdering::NameDesc,
            _ => VocabOrdering::NameAsc,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VocabListFilter {
    pub search: Option<String>,
    pub ordering: VocabOrdering,
    pub offset: u64,
    pub limit: u64,
}

#[async_trait]
pub trait VocabularyQuery: Send + Sync {
    async fn list(
        &self,
        kind: VocabKind,
        filter: VocabListFilter,
    ) -> Result<Vec<VocabItem>, VocabularyQueryError>;
}
