use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::work_experience_repository::{
    NewWorkExperience, WorkExperienceRepository, WorkExperienceRepositoryError,
};
use crate::modules::profile::application::domain::entities::WorkExperience;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

const REQUIRED: &str = "This field is required.";

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct WorkExperienceRequest {
    #[serde(default)]
    #[schema(example = "Systems Engineer")]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub current_role: Option<bool>,
}

impl WorkExperienceRequest {
    fn validate(self) -> Result<NewWorkExperience, BTreeMap<String, String>> {
        let mut violations = BTreeMap::new();
        let job_title = self.job_title.filter(|v| !v.trim().is_empty());
        let company = self.company.filter(|v| !v.trim().is_empty());
        let description = self.description.filter(|v| !v.trim().is_empty());
        if job_title.is_none() {
            violations.insert("job_title".to_string(), REQUIRED.to_string());
        }
        if company.is_none() {
            violations.insert("company".to_string(), REQUIRED.to_string());
        }
        if self.start_date.is_none() {
            violations.insert("start_date".to_string(), REQUIRED.to_string());
        }
        if description.is_none() {
            violations.insert("description".to_string(), REQUIRED.to_string());
        }
        if !violations.is_empty() {
            return Err(violations);
        }
        Ok(NewWorkExperience {
            job_title: job_title.unwrap_or_default(),
            company: company.unwrap_or_default(),
            company_url: self.company_url,
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date,
            description: description.unwrap_or_default(),
            current_role: self.current_role.unwrap_or(false),
        })
    }
}

#[derive(Debug)]
pub enum WorkExperienceError {
    NotOwner,
    ProfileNotFound,
    ExperienceNotFound,
    Validation(BTreeMap<String, String>),
    StoreError(String),
}

impl fmt::Display for WorkExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkExperienceError::NotOwner => write!(f, "User is unauthorized"),
            WorkExperienceError::ProfileNotFound => write!(f, "Profile not found"),
            WorkExperienceError::ExperienceNotFound => write!(f, "Work experience not found"),
            WorkExperienceError::Validation(_) => write!(f, "Validation failed"),
            WorkExperienceError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for WorkExperienceError {}

#[async_trait]
pub trait IWorkExperiencesUseCase {
    async fn list(&self, profile_uuid: Uuid) -> Result<Vec<WorkExperience>, WorkExperienceError>;

    async fn create(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        request: WorkExperienceRequest,
    ) -> Result<WorkExperience, WorkExperienceError>;

    async fn delete(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        experience_id: i64,
    ) -> Result<(), WorkExperienceError>;
}

pub struct WorkExperiencesUseCase<Q: ProfileQuery, R: WorkExperienceRepository> {
    profile_query: Arc<Q>,
    experience_repository: Arc<R>,
}

impl<Q: ProfileQuery, R: WorkExperienceRepository> WorkExperiencesUseCase<Q, R> {
    pub fn new(profile_query: Arc<Q>, experience_repository: Arc<R>) -> Self {
        Self {
            profile_query,
            experience_repository,
        }
    }

    async fn profile_id(&self, profile_uuid: Uuid) -> Result<i64, WorkExperienceError> {
        self.profile_query
            .freelancer_profile_id(profile_uuid)
            .await
            .map_err(|e| WorkExperienceError::StoreError(e.to_string()))?
            .ok_or(WorkExperienceError::ProfileNotFound)
    }

    fn map_repo_err(e: WorkExperienceRepositoryError) -> WorkExperienceError {
        match e {
            WorkExperienceRepositoryError::NotFound => WorkExperienceError::ExperienceNotFound,
            WorkExperienceRepositoryError::DatabaseError(msg) => {
                WorkExperienceError::StoreError(msg)
            }
        }
    }
}

#[async_trait]
impl<Q: ProfileQuery, R: WorkExperienceRepository> IWorkExperiencesUseCase
    for WorkExperiencesUseCase<Q, R>
{
    async fn list(&self, profile_uuid: Uuid) -> Result<Vec<WorkExperience>, WorkExperienceError> {
        let profile_id = self.profile_id(profile_uuid).await?;
        self.experience_repository
            .list(profile_id)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn create(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        request: WorkExperienceRequest,
    ) -> Result<WorkExperience, WorkExperienceError> {
        if caller_uuid != profile_uuid {
            return Err(WorkExperienceError::NotOwner);
        }
        let profile_id = self.profile_id(profile_uuid).await?;
        let experience = request
            .validate()
            .map_err(WorkExperienceError::Validation)?;
        self.experience_repository
            .create(profile_id, experience)
            .await
            .map_err(Self::map_repo_err)
    }

    async fn delete(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        experience_id: i64,
    ) -> Result<(), WorkExperienceError> {
        if caller_uuid != profile_uuid {
            return Err(WorkExperienceError::NotOwner);
        }
        let profile_id = self.profile_id(profile_uuid).await?;
        self.experience_repository
            .delete(profile_id, experience_id)
            .await
            .map_err(Self::map_repo_err)
    }
}
