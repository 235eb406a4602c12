use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};

use crate::modules::profile::application::domain::entities::{VocabItem, VocabKind};
use crate::modules::vocabulary::application::ports::outgoing::vocabulary_repository::{
    VocabularyRepository, VocabularyRepositoryError,
};

use super::sea_orm_entity::{languages, niches, skills};

#[derive(Clone, Debug)]
pub struct VocabularyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VocabularyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_unique_violation(e: sea_orm::DbErr) -> VocabularyRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return VocabularyRepositoryError::NameTaken;
        }
        VocabularyRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl VocabularyRepository for VocabularyRepositoryPostgres {
    async fn create(
        &self,
        kind: VocabKind,
        name: String,
    ) -> Result<VocabItem, VocabularyRepositoryError> {
        let item = match kind {
            VocabKind::Niche => {
                let row = niches::ActiveModel {
                    name: Set(name),
                    ..Default::default()
                }
                .insert(&*self.db)
                .await
                .map_err(Self::map_unique_violation)?;
                VocabItem {
                    id: row.id,
                    name: row.name,
                }
            }
            VocabKind::Skill => {
                let row = skills::ActiveModel {
                    name: Set(name),
                    ..Default::default()
                }
                .insert(&*self.db)
                .await
                .map_err(Self::map_unique_violation)?;
                VocabItem {
                    id: row.id,
                    name: row.name,
                }
            }
            VocabKind::Language => {
                let row = languages::ActiveModel {
                    name: Set(name),
                    ..Default::default()
                }
                .insert(&*self.db)
                .await
                .map_err(Self::map_unique_violation)?;
                VocabItem {
                    id: row.id,
                    name: row.name,
                }
            }
        };
        Ok(item)
    }
}
