use async_trait::async_trait;
use thiserror::Error;

use crate::modules::newsfeed::application::domain::entities::NewsFeedItem;

#[derive(Debug, Error)]
pub enum NewsFeedRepositoryError {
    #[error("News item not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[async_trait]
pub trait NewsFeedRepository: Send + Sync {
    /// Newest first, then highest id.
    async fn list(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<NewsFeedItem>, NewsFeedRepositoryError>;

    async fn find(&self, id: i64) -> Result<Option<NewsFeedItem>, NewsFeedRepositoryError>;

    async fn create(&self, post: NewPost) -> Result<NewsFeedItem, NewsFeedRepositoryError>;

    async fn update(
        &self,
        id: i64,
        changes: PostChanges,
    ) -> Result<NewsFeedItem, NewsFeedRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), NewsFeedRepositoryError>;
}
