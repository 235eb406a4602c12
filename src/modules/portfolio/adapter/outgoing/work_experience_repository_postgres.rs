use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

use crate::modules::portfolio::application::ports::outgoing::work_experience_repository::{
    NewWorkExperience, WorkExperienceRepository, WorkExperienceRepositoryError,
};
use crate::modules::profile::application::domain::entities::WorkExperience;

use super::sea_orm_entity::work_experiences;

#[derive(Clone, Debug)]
pub struct WorkExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WorkExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkExperienceRepository for WorkExperienceRepositoryPostgres {
    async fn list(
        &self,
        profile_id: i64,
    ) -> Result<Vec<WorkExperience>, WorkExperienceRepositoryError> {
        let rows = work_experiences::Entity::find()
            .filter(work_experiences::Column::ProfileId.eq(profile_id))
            .order_by_desc(work_experiences::Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(|e| WorkExperienceRepositoryError::DatabaseError(e.to_string()))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(
        &self,
        profile_id: i64,
        experience: NewWorkExperience,
    ) -> Result<WorkExperience, WorkExperienceRepositoryError> {
        let row = work_experiences::ActiveModel {
            profile_id: Set(profile_id),
            job_title: Set(experience.job_title),
            company: Set(experience.company),
            company_url: Set(experience.company_url),
            start_date: Set(experience.start_date),
            end_date: Set(experience.end_date),
            description: Set(experience.description),
            current_role: Set(experience.current_role),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| WorkExperienceRepositoryError::DatabaseError(e.to_string()))?;
        Ok(row.into())
    }

    async fn delete(
        &self,
        profile_id: i64,
        experience_id: i64,
    ) -> Result<(), WorkExperienceRepositoryError> {
        let existing = work_experiences::Entity::find_by_id(experience_id)
            .filter(work_experiences::Column::ProfileId.eq(profile_id))
            .one(&*self.db)
            .await
            .map_err(|e| WorkExperienceRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(WorkExperienceRepositoryError::NotFound)?;
        existing
            .delete(&*self.db)
            .await
            .map_err(|e| WorkExperienceRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
