use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::modules::profile::application::domain::entities::{VocabItem, VocabKind};
use crate::modules::vocabulary::application::ports::outgoing::vocabulary_query::{
    VocabListFilter, VocabOrdering, VocabularyQuery, VocabularyQueryError,
};

use super::sea_orm_entity::{languages, niches, skills};

#[derive(Clone, Debug)]
pub struct VocabularyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VocabularyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn list_table<E, M>(
        &self,
        filter: VocabListFilter,
        name_col: E::Column,
        to_item: M,
    ) -> Result<Vec<VocabItem>, VocabularyQueryError>
    where
        E: EntityTrait,
        M: Fn(E::Model) -> VocabItem,
    {
        let mut query = E::find();
        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(name_col.contains(term));
        }
        query = match filter.ordering {
            VocabOrdering::NameAsc => query.order_by_asc(name_col),
            VocabOrdering::NameDesc => query.order_by_desc(name_col),
        };

        let rows = query
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(|e| VocabularyQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(to_item).collect())
    }
}

#[async_trait]
impl VocabularyQuery for VocabularyQueryPostgres {
    async fn list(
        &self,
        kind: VocabKind,
        filter: VocabListFilter,
    ) -> Result<Vec<VocabItem>, VocabularyQueryError> {
        match kind {
            VocabKind::Niche => {
                self.list_table::<niches::Entity, _>(filter, niches::Column::Name, |m| VocabItem {
                    id: m.id,
                    name: m.name,
                })
                .await
            }
            VocabKind::Skill => {
                self.list_table::<skills::Entity, _>(filter, skills::Column::Name, |m| VocabItem {
                    id: m.id,
                    name: m.name,
                })
                .await
            }
            VocabKind::Language => {
                self.list_table::<languages::Entity, _>(filter, languages::Column::Name, |m| {
                    VocabItem {
                        id: m.id,
                        name: m.name,
                    }
                })
                .await
            }
        }
    }
}
