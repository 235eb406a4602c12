use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{VocabItem, VocabKind};
use crate::modules::vocabulary::application::ports::outgoing::vocabulary_query::{
    VocabListFilter, VocabularyQuery,
};

#[derive(Debug)]
pub enum ListVocabularyError {
    QueryError(String),
}

impl fmt::Display for ListVocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListVocabularyError::QueryError(e) => write!(f, "Query error: {}", e),
        }
    }
}

impl std::error::Error for ListVocabularyError {}

#[async_trait]
pub trait IListVocabularyUseCase {
    async fn execute(
        &self,
        kind: VocabKind,
        filter: VocabListFilter,
    ) -> Result<Vec<VocabItem>, ListVocabularyError>;
}

pub struct ListVocabularyUseCase<Q: VocabularyQuery> {
    vocabulary_query: Arc<Q>,
}

impl<Q: VocabularyQuery> ListVocabularyUseCase<Q> {
    pub fn new(vocabulary_query: Arc<Q>) -> Self {
        Self { vocabulary_query }
    }
}

#[async_trait]
impl<Q: VocabularyQuery> IListVocabularyUseCase for ListVocabularyUseCase<Q> {
    async fn execute(
        &self,
        kind: VocabKind,
        filter: VocabListFilter,
    ) -> Result<Vec<VocabItem>, ListVocabularyError> {
        self.vocabulary_query
            .list(kind, filter)
            .await
            .map_err(|e| ListVocabularyError::QueryError(e.to_string()))
    }
}
