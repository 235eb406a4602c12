use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profile::application::domain::entities::{
    BasicProfile, BasicProfileChanges, FreelancerProfile, FreelancerProfileChanges,
};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError,
};

use super::sea_orm_entity::{admin_profiles, freelancer_profiles};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: sea_orm::DbErr) -> ProfileRepositoryError {
        ProfileRepositoryError::DatabaseError(e.to_string())
    }

    async fn user_row(&self, user_uuid: Uuid) -> Result<users::Model, ProfileRepositoryError> {
        users::Entity::find()
            .filter(users::Column::Uuid.eq(user_uuid))
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(ProfileRepositoryError::NotFound)
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn update_freelancer(
        &self,
        user_uuid: Uuid,
        changes: FreelancerProfileChanges,
    ) -> Result<FreelancerProfile, ProfileRepositoryError> {
        let user = self.user_row(user_uuid).await?;

        let profile = freelancer_profiles::Entity::find()
            .filter(freelancer_profiles::Column::UserId.eq(user.id))
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(ProfileRepositoryError::NotFound)?;

        let mut active: freelancer_profiles::ActiveModel = profile.into();
        if let Some(v) = changes.first_name {
            active.first_name = Set(Some(v));
        }
        if let Some(v) = changes.last_name {
            active.last_name = Set(Some(v));
        }
        if let Some(v) = changes.bio {
            active.bio = Set(Some(v));
        }
        if let Some(v) = changes.about_me {
            active.about_me = Set(Some(v));
        }
        if let Some(v) = changes.location {
            active.location = Set(Some(v));
        }

        let updated = active.update(&*self.db).await.map_err(Self::db_err)?;

        Ok(FreelancerProfile {
            id: updated.id,
            uuid: user.uuid,
            username: user.username,
            email: user.email,
            first_name: updated.first_name,
            last_name: updated.last_name,
            bio: updated.bio,
            about_me: updated.about_me,
            location: updated.location,
            profile_pic_url: updated.profile_pic_url,
            resume_url: updated.resume_url,
        })
    }

    async fn update_admin(
        &self,
        user_uuid: Uuid,
        changes: BasicProfileChanges,
    ) -> Result<BasicProfile, ProfileRepositoryError> {
        let user = self.user_row(user_uuid).await?;

        let profile = admin_profiles::Entity::find()
            .filter(admin_profiles::Column::UserId.eq(user.id))
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(ProfileRepositoryError::NotFound)?;

        let mut active: admin_profiles::ActiveModel = profile.into();
        if let Some(v) = changes.first_name {
            active.first_name = Set(Some(v));
        }
        if let Some(v) = changes.last_name {
            active.last_name = Set(Some(v));
        }
        if let Some(v) = changes.bio {
            active.bio = Set(Some(v));
        }

        let updated = active.update(&*self.db).await.map_err(Self::db_err)?;

        Ok(BasicProfile {
            id: updated.id,
            uuid: user.uuid,
            username: user.username,
            email: user.email,
            first_name: updated.first_name,
            last_name: updated.last_name,
            bio: updated.bio,
            profile_pic_url: updated.profile_pic_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn user_row(uuid: Uuid) -> users::Model {
        users::Model {
            id: 5,
            uuid,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: "freelancer".to_string(),
            is_active: true,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn profile_row() -> freelancer_profiles::Model {
        freelancer_profiles::Model {
            id: 9,
            user_id: 5,
            first_name: None,
            last_name: None,
            bio: None,
            about_me: None,
            location: None,
            profile_pic_url: None,
            profile_pic_public_id: None,
            resume_url: None,
            resume_public_id: None,
            provider: "password".to_string(),
            provider_user_id: None,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn updates_only_provided_fields() {
        let uuid = Uuid::new_v4();
        let mut updated = profile_row();
        updated.first_name = Some("Ada".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_row(uuid)]])
            .append_query_results([vec![profile_row()]])
            .append_query_results([vec![updated]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let changes = FreelancerProfileChanges {
            first_name: Some("Ada".to_string()),
            ..FreelancerProfileChanges::default()
        };
        let profile = repo.update_freelancer(uuid, changes).await.unwrap();

        assert_eq!(profile.first_name.as_deref(), Some("Ada"));
        assert_eq!(profile.username, "ada");
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_freelancer(Uuid::new_v4(), FreelancerProfileChanges::default())
            .await;
        assert!(matches!(result, Err(ProfileRepositoryError::NotFound)));
    }
}
