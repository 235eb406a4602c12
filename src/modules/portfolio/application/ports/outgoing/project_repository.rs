use async_trait::async_trait;
use thiserror::Error;

use crate::modules::profile::application::domain::entities::PortfolioProject;

#[derive(Debug, Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub url: String,
    pub skills: Option<String>,
    pub tools: Option<String>,
    pub description: Option<String>,
}

/// Sort key for a profile's project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectOrdering {
    #[default]
    NameAsc,
    NameDesc,
}

impl ProjectOrdering {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("-name") => ProjectOrdering::NameDesc,
            _ => ProjectOrdering::NameAsc,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectListFilter {
    pub search: Option<String>,
    pub ordering: ProjectOrdering,
    pub offset: u64,
    pub limit: u64,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(
        &self,
        profile_id: i64,
        filter: ProjectListFilter,
    ) -> Result<Vec<PortfolioProject>, ProjectRepositoryError>;

    async fn create(
        &self,
        profile_id: i64,
        project: NewProject,
    ) -> Result<PortfolioProject, ProjectRepositoryError>;

    async fn delete(&self, profile_id: i64, project_id: i64)
        -> Result<(), ProjectRepositoryError>;
}
