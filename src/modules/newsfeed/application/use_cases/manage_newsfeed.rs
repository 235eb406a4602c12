use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::newsfeed::application::domain::entities::{NewsFeedItem, MAX_TITLE_LEN};
use crate::modules::newsfeed::application::ports::outgoing::newsfeed_repository::{
    NewPost, NewsFeedRepository, NewsFeedRepositoryError, PostChanges,
};

const REQUIRED: &str = "This field is required.";

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PostRequest {
    #[serde(default)]
    #[schema(example = "Platform update")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PostRequest {
    fn validate(self) -> Result<NewPost, BTreeMap<String, String>> {
        let mut violations = BTreeMap::new();
        let title = self.title.filter(|t| !t.trim().is_empty());
        let content = self.content.filter(|c| !c.trim().is_empty());
        match &title {
            None => {
                violations.insert("title".to_string(), REQUIRED.to_string());
            }
            Some(t) if t.chars().count() > MAX_TITLE_LEN => {
                violations.insert(
                    "title".to_string(),
                    format!(
                        "Ensure this field has no more than {} characters.",
                        MAX_TITLE_LEN
                    ),
                );
            }
            Some(_) => {}
        }
        if content.is_none() {
            violations.insert("content".to_string(), REQUIRED.to_string());
        }
        if !violations.is_empty() {
            return Err(violations);
        }
        Ok(NewPost {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
        })
    }
}

/// Update body; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PostUpdateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PostUpdateRequest {
    fn validate(self) -> Result<PostChanges, BTreeMap<String, String>> {
        if let Some(title) = &self.title {
            if title.chars().count() > MAX_TITLE_LEN {
                let mut violations = BTreeMap::new();
                violations.insert(
                    "title".to_string(),
                    format!(
                        "Ensure this field has no more than {} characters.",
                        MAX_TITLE_LEN
                    ),
                );
                return Err(violations);
            }
        }
        Ok(PostChanges {
            title: self.title,
            content: self.content,
        })
    }
}

#[derive(Debug)]
pub enum NewsFeedError {
    NotFound,
    Validation(BTreeMap<String, String>),
    StoreError(String),
}

impl fmt::Display for NewsFeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsFeedError::NotFound => write!(f, "News item not found"),
            NewsFeedError::Validation(_) => write!(f, "Validation failed"),
            NewsFeedError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for NewsFeedError {}

#[async_trait]
pub trait INewsFeedUseCase {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<NewsFeedItem>, NewsFeedError>;

    async fn get(&self, id: i64) -> Result<NewsFeedItem, NewsFeedError>;

    async fn create(&self, request: PostRequest) -> Result<NewsFeedItem, NewsFeedError>;

    async fn update(
        &self,
        id: i64,
        request: PostUpdateRequest,
    ) -> Result<NewsFeedItem, NewsFeedError>;

    async fn delete(&self, id: i64) -> Result<(), NewsFeedError>;
}

pub struct NewsFeedUseCase<R: NewsFeedRepository> {
    repository: Arc<R>,
}

impl<R: NewsFeedRepository> NewsFeedUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    fn map_repo_err(e: NewsFeedRepositoryError) -> NewsFeedError {
        match e {
            NewsFeedRepositoryError::NotFound => NewsFeedError::NotFound,
            NewsFeedRepositoryError::DatabaseError(msg) => NewsFeedError::StoreError(msg),
        }
    }
}

#[async_trait]
impl<R: NewsFeedRepository> INewsFeedUseCase for NewsFeedUseCase<R> {
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<NewsFeedItem>, NewsFeedError> {
        self.repository
            .list(offset, limit)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn get(&self, id: i64) -> Result<NewsFeedItem, NewsFeedError> {
        self.repository
            .find(id)
            .await
            .map_err(Self::map_repo_err)?
            .ok_or(NewsFeedError::NotFound)
    }

    async fn create(&self, request: PostRequest) -> Result<NewsFeedItem, NewsFeedError> {
        let post = request.validate().map_err(NewsFeedError::Validation)?;
        self.repository
            .create(post)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn update(
        &self,
        id: i64,
        request: PostUpdateRequest,
    ) -> Result<NewsFeedItem, NewsFeedError> {
        let changes = request.validate().map_err(NewsFeedError::Validation)?;
        self.repository
            .update(id, changes)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn delete(&self, id: i64) -> Result<(), NewsFeedError> {
        self.repository.delete(id).await.map_err(Self::map_repo_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::newsfeed::application::use_cases::mocks::MockNewsFeedRepository;

    fn use_case(repo: MockNewsFeedRepository) -> NewsFeedUseCase<MockNewsFeedRepository> {
        NewsFeedUseCase::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn create_requires_title_and_content() {
        let use_case = use_case(MockNewsFeedRepository::default());

        let result = use_case.create(PostRequest::default()).await;
        match result {
            Err(NewsFeedError::Validation(violations)) => {
                assert!(violations.contains_key("title"));
                assert!(violations.contains_key("content"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn overlong_title_is_rejected() {
        let use_case = use_case(MockNewsFeedRepository::default());

        let result = use_case
            .create(PostRequest {
                title: Some("t".repeat(MAX_TITLE_LEN + 1)),
                content: Some("body".to_string()),
            })
            .await;
        match result {
            Err(NewsFeedError::Validation(violations)) => {
                assert_eq!(
                    violations.get("title").map(String::as_str),
                    Some("Ensure this field has no more than 200 characters.")
                );
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetching_an_unknown_item_is_not_found() {
        let use_case = use_case(MockNewsFeedRepository::default());

        let result = use_case.get(42).await;
        assert!(matches!(result, Err(NewsFeedError::NotFound)));
    }

    #[tokio::test]
    async fn valid_post_is_stored() {
        let use_case = use_case(MockNewsFeedRepository::default());

        let item = use_case
            .create(PostRequest {
                title: Some("Platform update".to_string()),
                content: Some("body".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(item.title, "Platform update");
    }
}
