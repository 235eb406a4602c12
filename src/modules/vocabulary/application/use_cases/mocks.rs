use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{VocabItem, VocabKind};
use crate::modules::vocabulary::application::ports::outgoing::vocabulary_query::{
    VocabListFilter, VocabularyQuery, VocabularyQueryError,
};
use crate::modules::vocabulary::application::ports::outgoing::vocabulary_repository::{
    VocabularyRepository, VocabularyRepositoryError,
};

#[derive(Default)]
pub struct MockVocabularyQuery {
    pub items: Vec<VocabItem>,
    pub fail: bool,
}

impl MockVocabularyQuery {
    pub fn with_items(entries: &[(i64, &str)]) -> Self {
        Self {
            items: entries
                .iter()
                .map(|(id, name)| VocabItem {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
            fail: false,
        }
    }
}

#[async_trait]
impl VocabularyQuery for MockVocabularyQuery {
    async fn list(
        &self,
        _kind: VocabKind,
        _filter: VocabListFilter,
    ) -> Result<Vec<VocabItem>, VocabularyQueryError> {
        if self.fail {
            return Err(VocabularyQueryError::DatabaseError("boom".to_string()));
        }
        Ok(self.items.clone())
    }
}

#[derive(Default)]
pub struct MockVocabularyRepository {
    pub taken: bool,
    pub fail: bool,
    pub created: Mutex<Vec<(VocabKind, String)>>,
}

#[async_trait]
impl VocabularyRepository for MockVocabularyRepository {
    async fn create(
        &self,
        kind: VocabKind,
        name: String,
    ) -> Result<VocabItem, VocabularyRepositoryError> {
        if self.fail {
            return Err(VocabularyRepositoryError::DatabaseError("boom".to_string()));
        }
        if self.taken {
            return Err(VocabularyRepositoryError::NameTaken);
        }
        self.created.lock().unwrap().push((kind, name.clone()));
        Ok(VocabItem { id: 1, name })
    }
}
