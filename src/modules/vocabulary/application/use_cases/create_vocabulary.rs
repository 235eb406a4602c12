use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::profile::application::domain::entities::{VocabItem, VocabKind};
use crate::modules::vocabulary::application::ports::outgoing::vocabulary_repository::{
    VocabularyRepository, VocabularyRepositoryError,
};

const REQUIRED: &str = "This field is required.";

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateVocabRequest {
    #[serde(default)]
    #[schema(example = "Rust")]
    pub name: Option<String>,
}

#[derive(Debug)]
pub enum CreateVocabularyError {
    /// First violation for the `name` field, wire-ready.
    Validation(String),
    StoreError(String),
}

impl fmt::Display for CreateVocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateVocabularyError::Validation(msg) => write!(f, "{}", msg),
            CreateVocabularyError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for CreateVocabularyError {}

#[async_trait]
pub trait ICreateVocabularyUseCase {
    async fn execute(
        &self,
        kind: VocabKind,
        request: CreateVocabRequest,
    ) -> Result<VocabItem, CreateVocabularyError>;
}

pub struct CreateVocabularyUseCase<R: VocabularyRepository> {
    vocabulary_repository: Arc<R>,
}

impl<R: VocabularyRepository> CreateVocabularyUseCase<R> {
    pub fn new(vocabulary_repository: Arc<R>) -> Self {
        Self {
            vocabulary_repository,
        }
    }
}

#[async_trait]
impl<R: VocabularyRepository> ICreateVocabularyUseCase for CreateVocabularyUseCase<R> {
    async fn execute(
        &self,
        kind: VocabKind,
        request: CreateVocabRequest,
    ) -> Result<VocabItem, CreateVocabularyError> {
        let name = match request.name.map(|n| n.trim().to_string()) {
            Some(n) if !n.is_empty() => n,
            _ => return Err(CreateVocabularyError::Validation(REQUIRED.to_string())),
        };

        self.vocabulary_repository
            .create(kind, name)
            .await
            .map_err(|e| match e {
                VocabularyRepositoryError::NameTaken => CreateVocabularyError::Validation(format!(
                    "A {} with that name already exists.",
                    kind.noun().to_lowercase()
                )),
                VocabularyRepositoryError::DatabaseError(msg) => {
                    CreateVocabularyError::StoreError(msg)
                }
            })
    }
}
