use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::profile::application::domain::entities::WorkExperience;

#[derive(Debug, Error)]
pub enum WorkExperienceRepositoryError {
    #[error("Work experience not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewWorkExperience {
    pub job_title: String,
    pub company: String,
    pub company_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub current_role: bool,
}

#[async_trait]
pub trait WorkExperienceRepository: Send + Sync {
    /// Newest first by start date.
    async fn list(
        &self,
        profile_id: i64,
    ) -> Result<Vec<WorkExperience>, WorkExperienceRepositoryError>;

    async fn create(
        &self,
        profile_id: i64,
        experience: NewWorkExperience,
    ) -> Result<WorkExperience, WorkExperienceRepositoryError>;

    async fn delete(
        &self,
        profile_id: i64,
        experience_id: i64,
    ) -> Result<(), WorkExperienceRepositoryError>;
}
