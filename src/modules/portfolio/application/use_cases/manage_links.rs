use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::link_repository::{
    LinkRepository, LinkRepositoryError, NewLink,
};
use crate::modules::profile::application::domain::entities::ProfileLink;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

const REQUIRED: &str = "This field is required.";

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LinkRequest {
    #[serde(default)]
    #[schema(example = "GitHub")]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    #[schema(example = "https://github.com/ada")]
    pub url: Option<String>,
}

impl LinkRequest {
    fn validate(self) -> Result<NewLink, BTreeMap<String, String>> {
        let mut violations = BTreeMap::new();
        let name = match self.name.filter(|n| !n.trim().is_empty()) {
            Some(n) => n,
            None => {
                violations.insert("name".to_string(), REQUIRED.to_string());
                String::new()
            }
        };
        let url = match self.url.filter(|u| !u.trim().is_empty()) {
            Some(u) => u,
            None => {
                violations.insert("url".to_string(), REQUIRED.to_string());
                String::new()
            }
        };
        if !violations.is_empty() {
            return Err(violations);
        }
        Ok(NewLink {
            name,
            icon: self.icon,
            url,
        })
    }
}

#[derive(Debug)]
pub enum LinkError {
    NotOwner,
    ProfileNotFound,
    LinkNotFound,
    Validation(BTreeMap<String, String>),
    StoreError(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::NotOwner => write!(f, "User is unauthorized"),
            LinkError::ProfileNotFound => write!(f, "Profile not found"),
            LinkError::LinkNotFound => write!(f, "Link not found"),
            LinkError::Validation(_) => write!(f, "Validation failed"),
            LinkError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for LinkError {}

#[async_trait]
pub trait ILinksUseCase {
    async fn create(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        request: LinkRequest,
    ) -> Result<ProfileLink, LinkError>;

    async fn update(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        link_id: i64,
        request: LinkRequest,
    ) -> Result<ProfileLink, LinkError>;

    async fn delete(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        link_id: i64,
    ) -> Result<(), LinkError>;
}

pub struct LinksUseCase<Q: ProfileQuery, R: LinkRepository> {
    profile_query: Arc<Q>,
    link_repository: Arc<R>,
}

impl<Q: ProfileQuery, R: LinkRepository> LinksUseCase<Q, R> {
    pub fn new(profile_query: Arc<Q>, link_repository: Arc<R>) -> Self {
        Self {
            profile_query,
            link_repository,
        }
    }

    async fn owned_profile_id(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
    ) -> Result<i64, LinkError> {
        if caller_uuid != profile_uuid {
            return Err(LinkError::NotOwner);
        }
        self.profile_query
            .freelancer_profile_id(profile_uuid)
            .await
            .map_err(|e| LinkError::StoreError(e.to_string()))?
            .ok_or(LinkError::ProfileNotFound)
    }

    fn map_repo_err(e: LinkRepositoryError) -> LinkError {
        match e {
            LinkRepositoryError::NotFound => LinkError::LinkNotFound,
            LinkRepositoryError::DatabaseError(msg) => LinkError::StoreError(msg),
        }
    }
}

#[async_trait]
impl<Q: ProfileQuery, R: LinkRepository> ILinksUseCase for LinksUseCase<Q, R> {
    async fn create(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        request: LinkRequest,
    ) -> Result<ProfileLink, LinkError> {
        let profile_id = self.owned_profile_id(caller_uuid, profile_uuid).await?;
        let link = request.validate().map_err(LinkError::Validation)?;
        self.link_repository
            .create(profile_id, link)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn update(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        link_id: i64,
        request: LinkRequest,
    ) -> Result<ProfileLink, LinkError> {
        let profile_id = self.owned_profile_id(caller_uuid, profile_uuid).await?;
        let link = request.validate().map_err(LinkError::Validation)?;
        self.link_repository
            .update(profile_id, link_id, link)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn delete(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        link_id: i64,
    ) -> Result<(), LinkError> {
        let profile_id = self.owned_profile_id(caller_uuid, profile_uuid).await?;
        self.link_repository
            .delete(profile_id, link_id)
            .await
            .map_err(Self::map_repo_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::use_cases::mocks::MockLinkRepository;
    use crate::modules::profile::application::use_cases::mocks::{
        sample_freelancer, MockProfileQuery,
    };

    fn use_case(
        uuid: Uuid,
        repo: MockLinkRepository,
    ) -> LinksUseCase<MockProfileQuery, MockLinkRepository> {
        LinksUseCase::new(
            Arc::new(MockProfileQuery::with_freelancer(sample_freelancer(uuid))),
            Arc::new(repo),
        )
    }

    #[tokio::test]
    async fn owner_creates_a_link() {
        let uuid = Uuid::new_v4();
        let use_case = use_case(uuid, MockLinkRepository::default());

        let link = use_case
            .create(
                uuid,
                uuid,
                LinkRequest {
                    name: Some("GitHub".to_string()),
                    icon: None,
                    url: Some("https://github.com/ada".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(link.name, "GitHub");
    }

    #[tokio::test]
    async fn non_owner_is_unauthorized() {
        let use_case = use_case(Uuid::new_v4(), MockLinkRepository::default());

        let result = use_case
            .create(Uuid::new_v4(), Uuid::new_v4(), LinkRequest::default())
            .await;
        assert!(matches!(result, Err(LinkError::NotOwner)));
    }

    #[tokio::test]
    async fn missing_fields_are_collected() {
        let uuid = Uuid::new_v4();
        let use_case = use_case(uuid, MockLinkRepository::default());

        let result = use_case.create(uuid, uuid, LinkRequest::default()).await;
        match result {
            Err(LinkError::Validation(violations)) => {
                assert_eq!(violations.get("name").unwrap(), REQUIRED);
                assert_eq!(violations.get("url").unwrap(), REQUIRED);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn deleting_an_unknown_link_is_not_found() {
        let uuid = Uuid::new_v4();
        let repo = MockLinkRepository {
            missing: true,
            ..MockLinkRepository::default()
        };
        let use_case = use_case(uuid, repo);

        let result = use_case.delete(uuid, uuid, 42).await;
        assert!(matches!(result, Err(LinkError::LinkNotFound)));
    }
}
