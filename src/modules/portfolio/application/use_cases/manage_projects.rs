use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::project_repository::{
    NewProject, ProjectListFilter, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::profile::application::domain::entities::PortfolioProject;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

const REQUIRED: &str = "This field is required.";

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProjectRequest {
    #[serde(default)]
    #[schema(example = "Analytical Engine")]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub tools: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectRequest {
    fn validate(self) -> Result<NewProject, BTreeMap<String, String>> {
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
        Ok(NewProject {
            name,
            url,
            skills: self.skills,
            tools: self.tools,
            description: self.description,
        })
    }
}

#[derive(Debug)]
pub enum ProjectError {
    NotOwner,
    ProfileNotFound,
    ProjectNotFound,
    Validation(BTreeMap<String, String>),
    StoreError(String),
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectError::NotOwner => write!(f, "User is unauthorized"),
            ProjectError::ProfileNotFound => write!(f, "Profile not found"),
            ProjectError::ProjectNotFound => write!(f, "Project not found"),
            ProjectError::Validation(_) => write!(f, "Validation failed"),
            ProjectError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for ProjectError {}

#[async_trait]
pub trait IProjectsUseCase {
    /// Public listing; the profile is keyed by its owning user's uuid.
    async fn list(
        &self,
        profile_uuid: Uuid,
        filter: ProjectListFilter,
    ) -> Result<Vec<PortfolioProject>, ProjectError>;

    async fn create(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        request: ProjectRequest,
    ) -> Result<PortfolioProject, ProjectError>;

    async fn delete(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        project_id: i64,
    ) -> Result<(), ProjectError>;
}

pub struct ProjectsUseCase<Q: ProfileQuery, R: ProjectRepository> {
    profile_query: Arc<Q>,
    project_repository: Arc<R>,
}

impl<Q: ProfileQuery, R: ProjectRepository> ProjectsUseCase<Q, R> {
    pub fn new(profile_query: Arc<Q>, project_repository: Arc<R>) -> Self {
        Self {
            profile_query,
            project_repository,
        }
    }

    async fn profile_id(&self, profile_uuid: Uuid) -> Result<i64, ProjectError> {
        self.profile_query
            .freelancer_profile_id(profile_uuid)
            .await
            .map_err(|e| ProjectError::StoreError(e.to_string()))?
            .ok_or(ProjectError::ProfileNotFound)
    }

    fn map_repo_err(e: ProjectRepositoryError) -> ProjectError {
        match e {
            ProjectRepositoryError::NotFound => ProjectError::ProjectNotFound,
            ProjectRepositoryError::DatabaseError(msg) => ProjectError::StoreError(msg),
        }
    }
}

#[async_trait]
impl<Q: ProfileQuery, R: ProjectRepository> IProjectsUseCase for ProjectsUseCase<Q, R> {
    async fn list(
        &self,
        profile_uuid: Uuid,
        filter: ProjectListFilter,
    ) -> Result<Vec<PortfolioProject>, ProjectError> {
        let profile_id = self.profile_id(profile_uuid).await?;
        self.project_repository
            .list(profile_id, filter)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn create(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        request: ProjectRequest,
    ) -> Result<PortfolioProject, ProjectError> {
        if caller_uuid != profile_uuid {
            return Err(ProjectError::NotOwner);
        }
        let profile_id = self.profile_id(profile_uuid).await?;
        let project = request.validate().map_err(ProjectError::Validation)?;
        self.project_repository
            .create(profile_id, project)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn delete(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        project_id: i64,
    ) -> Result<(), ProjectError> {
        if caller_uuid != profile_uuid {
            return Err(ProjectError::NotOwner);
        }
        let profile_id = self.profile_id(profile_uuid).await?;
        self.project_repository
            .delete(profile_id, project_id)
            .await
            .map_err(Self::map_repo_err)
    }
}
