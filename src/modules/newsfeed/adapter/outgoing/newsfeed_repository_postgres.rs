use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder,
    QuerySelect,
};

use crate::modules::newsfeed::application::domain::entities::NewsFeedItem;
use crate::modules::newsfeed::application::ports::outgoing::newsfeed_repository::{
    NewPost, NewsFeedRepository, NewsFeedRepositoryError, PostChanges,
};

use super::sea_orm_entity::news_feeds;

#[derive(Clone, Debug)]
pub struct NewsFeedRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsFeedRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: sea_orm::DbErr) -> NewsFeedRepositoryError {
        NewsFeedRepositoryError::DatabaseError(e.to_string())
    }

    async fn require(&self, id: i64) -> Result<news_feeds::Model, NewsFeedRepositoryError> {
        news_feeds::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(NewsFeedRepositoryError::NotFound)
    }
}

#[async_trait]
impl NewsFeedRepository for NewsFeedRepositoryPostgres {
    async fn list(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<NewsFeedItem>, NewsFeedRepositoryError> {
        let rows = news_feeds::Entity::find()
            .order_by_desc(news_feeds::Column::CreatedAt)
            .order_by_desc(news_feeds::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<NewsFeedItem>, NewsFeedRepositoryError> {
        Ok(news_feeds::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .map(Into::into))
    }

    async fn create(&self, post: NewPost) -> Result<NewsFeedItem, NewsFeedRepositoryError> {
        let row = news_feeds::ActiveModel {
            title: Set(post.title),
            content: Set(post.content),
            created_at: Set(Utc::now().date_naive()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(Self::db_err)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: i64,
        changes: PostChanges,
    ) -> Result<NewsFeedItem, NewsFeedRepositoryError> {
        let existing = self.require(id).await?;
        let mut active: news_feeds::ActiveModel = existing.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        let row = active.update(&*self.db).await.map_err(Self::db_err)?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), NewsFeedRepositoryError> {
        let existing = self.require(id).await?;
        existing.delete(&*self.db).await.map_err(Self::db_err)?;
        Ok(())
    }
}
