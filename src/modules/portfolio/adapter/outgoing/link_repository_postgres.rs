use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter,
};

use crate::modules::portfolio::application::ports::outgoing::link_repository::{
    LinkRepository, LinkRepositoryError, NewLink,
};
use crate::modules::profile::application::domain::entities::ProfileLink;

use super::sea_orm_entity::freelancer_links;

#[derive(Clone, Debug)]
pub struct LinkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LinkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_owned(
        &self,
        profile_id: i64,
        link_id: i64,
    ) -> Result<freelancer_links::Model, LinkRepositoryError> {
        freelancer_links::Entity::find_by_id(link_id)
            .filter(freelancer_links::Column::ProfileId.eq(profile_id))
            .one(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(LinkRepositoryError::NotFound)
    }
}

#[async_trait]
impl LinkRepository for LinkRepositoryPostgres {
    async fn create(
        &self,
        profile_id: i64,
        link: NewLink,
    ) -> Result<ProfileLink, LinkRepositoryError> {
        let row = freelancer_links::ActiveModel {
            profile_id: Set(profile_id),
            name: Set(link.name),
            icon: Set(link.icon),
            url: Set(link.url),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;
        Ok(row.into())
    }

    async fn update(
        &self,
        profile_id: i64,
        link_id: i64,
        link: NewLink,
    ) -> Result<ProfileLink, LinkRepositoryError> {
        let existing = self.find_owned(profile_id, link_id).await?;
        let mut active: freelancer_links::ActiveModel = existing.into();
        active.name = Set(link.name);
        active.icon = Set(link.icon);
        active.url = Set(link.url);
        let row = active
            .update(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;
        Ok(row.into())
    }

    async fn delete(&self, profile_id: i64, link_id: i64) -> Result<(), LinkRepositoryError> {
        let existing = self.find_owned(profile_id, link_id).await?;
        existing
            .delete(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
