use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::newsfeed::application::domain::entities::NewsFeedItem;
use crate::modules::newsfeed::application::ports::outgoing::newsfeed_repository::{
    NewPost, NewsFeedRepository, NewsFeedRepositoryError, PostChanges,
};

pub fn sample_item(id: i64, title: &str) -> NewsFeedItem {
    NewsFeedItem {
        id,
        title: title.to_string(),
        content: "body".to_string(),
        created_at: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
    }
}

#[derive(Default)]
pub struct MockNewsFeedRepository {
    pub items: Vec<NewsFeedItem>,
    pub fail: bool,
    pub deleted: Mutex<Vec<i64>>,
}

impl MockNewsFeedRepository {
    pub fn with_items(items: Vec<NewsFeedItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    fn guard(&self) -> Result<(), NewsFeedRepositoryError> {
        if self.fail {
            Err(NewsFeedRepositoryError::DatabaseError("boom".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl NewsFeedRepository for MockNewsFeedRepository {
    async fn list(
        &self,
        _offset: u64,
        _limit: u64,
    ) -> Result<Vec<NewsFeedItem>, NewsFeedRepositoryError> {
        self.guard()?;
        Ok(self.items.clone())
    }

    async fn find(&self, id: i64) -> Result<Option<NewsFeedItem>, NewsFeedRepositoryError> {
        self.guard()?;
        Ok(self.items.iter().find(|i| i.id == id).cloned())
    }

    async fn create(&self, post: NewPost) -> Result<NewsFeedItem, NewsFeedRepositoryError> {
        self.guard()?;
        Ok(NewsFeedItem {
            id: 1,
            title: post.title,
            content: post.content,
            created_at: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        })
    }

    async fn update(
        &self,
        id: i64,
        changes: PostChanges,
    ) -> Result<NewsFeedItem, NewsFeedRepositoryError> {
        self.guard()?;
        let mut item = self
            .items
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(NewsFeedRepositoryError::NotFound)?;
        if let Some(title) = changes.title {
            item.title = title;
        }
        if let Some(content) = changes.content {
            item.content = content;
        }
        Ok(item)
    }

    async fn delete(&self, id: i64) -> Result<(), NewsFeedRepositoryError> {
        self.guard()?;
        if !self.items.iter().any(|i| i.id == id) {
            return Err(NewsFeedRepositoryError::NotFound);
        }
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}
