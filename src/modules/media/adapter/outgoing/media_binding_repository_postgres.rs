use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::media::application::ports::outgoing::media_binding_repository::{
    MediaBindingError, MediaBindingRepository, MediaRef,
};
use crate::modules::media::application::ports::outgoing::media_store::StoredMedia;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::freelancer_profiles;

#[derive(Clone, Debug)]
pub struct MediaBindingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaBindingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: sea_orm::DbErr) -> MediaBindingError {
        MediaBindingError::DatabaseError(e.to_string())
    }

    fn media_ref(url: Option<String>, public_id: Option<String>) -> Option<MediaRef> {
        url.map(|url| MediaRef { url, public_id })
    }

    fn split(media: Option<StoredMedia>) -> (Option<String>, Option<String>) {
        match media {
            Some(m) => (Some(m.secure_url), Some(m.public_id)),
            None => (None, None),
        }
    }

    async fn profile_row(
        &self,
        user_uuid: Uuid,
    ) -> Result<freelancer_profiles::Model, MediaBindingError> {
        freelancer_profiles::Entity::find()
            .inner_join(users::Entity)
            .filter(users::Column::Uuid.eq(user_uuid))
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(MediaBindingError::ProfileNotFound)
    }

    async fn project_row(
        &self,
        profile_id: i64,
        project_id: i64,
    ) -> Result<projects::Model, MediaBindingError> {
        projects::Entity::find_by_id(project_id)
            .filter(projects::Column::ProfileId.eq(profile_id))
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(MediaBindingError::ProjectNotFound)
    }
}

#[async_trait]
impl MediaBindingRepository for MediaBindingRepositoryPostgres {
    async fn find_profile_picture(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<MediaRef>, MediaBindingError> {
        let row = self.profile_row(user_uuid).await?;
        Ok(Self::media_ref(
            row.profile_pic_url,
            row.profile_pic_public_id,
        ))
    }

    async fn set_profile_picture(
        &self,
        user_uuid: Uuid,
        media: Option<StoredMedia>,
    ) -> Result<(), MediaBindingError> {
        let row = self.profile_row(user_uuid).await?;
        let (url, public_id) = Self::split(media);

        let mut active: freelancer_profiles::ActiveModel = row.into();
        active.profile_pic_url = Set(url);
        active.profile_pic_public_id = Set(public_id);
        active.update(&*self.db).await.map_err(Self::db_err)?;
        Ok(())
    }

    async fn find_resume(&self, user_uuid: Uuid) -> Result<Option<MediaRef>, MediaBindingError> {
        let row = self.profile_row(user_uuid).await?;
        Ok(Self::media_ref(row.resume_url, row.resume_public_id))
    }

    async fn set_resume(
        &self,
        user_uuid: Uuid,
        media: Option<StoredMedia>,
    ) -> Result<(), MediaBindingError> {
        let row = self.profile_row(user_uuid).await?;
        let (url, public_id) = Self::split(media);

        let mut active: freelancer_profiles::ActiveModel = row.into();
        active.resume_url = Set(url);
        active.resume_public_id = Set(public_id);
        active.update(&*self.db).await.map_err(Self::db_err)?;
        Ok(())
    }

    async fn find_project_cover(
        &self,
        profile_id: i64,
        project_id: i64,
    ) -> Result<Option<MediaRef>, MediaBindingError> {
        let row = self.project_row(profile_id, project_id).await?;
        Ok(Self::media_ref(
            row.cover_image_url,
            row.cover_image_public_id,
        ))
    }

    async fn set_project_cover(
        &self,
        profile_id: i64,
        project_id: i64,
        media: Option<StoredMedia>,
    ) -> Result<(), MediaBindingError> {
        let row = self.project_row(profile_id, project_id).await?;
        let (url, public_id) = Self::split(media);

        let mut active: projects::ActiveModel = row.into();
        active.cover_image_url = Set(url);
        active.cover_image_public_id = Set(public_id);
        active.update(&*self.db).await.map_err(Self::db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn profile_row(pic: Option<&str>) -> freelancer_profiles::Model {
        freelancer_profiles::Model {
            id: 9,
            user_id: 5,
            first_name: None,
            last_name: None,
            bio: None,
            about_me: None,
            location: None,
            profile_pic_url: pic.map(str::to_string),
            profile_pic_public_id: pic.map(|_| "talentlink/old.png".to_string()),
            resume_url: None,
            resume_public_id: None,
            provider: "password".to_string(),
            provider_user_id: None,
            created_at: Utc::now().into(),
        }
    }

    fn project_row(cover: Option<&str>) -> projects::Model {
        projects::Model {
            id: 42,
            profile_id: 9,
            name: "analytical-engine".to_string(),
            url: "https://example.com".to_string(),
            skills: None,
            tools: None,
            description: None,
            cover_image_url: cover.map(str::to_string),
            cover_image_public_id: cover.map(|_| "talentlink/cover.png".to_string()),
        }
    }

    #[tokio::test]
    async fn reads_the_current_picture_binding() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![profile_row(Some("https://storage.example/a.png"))]])
            .into_connection();

        let repo = MediaBindingRepositoryPostgres::new(Arc::new(db));
        let media = repo.find_profile_picture(Uuid::new_v4()).await.unwrap();

        let media = media.unwrap();
        assert_eq!(media.url, "https://storage.example/a.png");
        assert_eq!(media.public_id.as_deref(), Some("talentlink/old.png"));
    }

    #[tokio::test]
    async fn a_profile_without_a_picture_reads_as_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![profile_row(None)]])
            .into_connection();

        let repo = MediaBindingRepositoryPostgres::new(Arc::new(db));
        assert!(repo
            .find_profile_picture(Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn a_missing_profile_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<freelancer_profiles::Model>::new()])
            .into_connection();

        let repo = MediaBindingRepositoryPostgres::new(Arc::new(db));
        let err = repo.find_resume(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, MediaBindingError::ProfileNotFound));
    }

    #[tokio::test]
    async fn clearing_a_cover_writes_null_columns() {
        let mut cleared = project_row(None);
        cleared.cover_image_url = None;
        cleared.cover_image_public_id = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![project_row(Some("https://storage.example/c.png"))]])
            .append_query_results([vec![cleared]])
            .into_connection();

        let repo = MediaBindingRepositoryPostgres::new(Arc::new(db));
        repo.set_project_cover(9, 42, None).await.unwrap();
    }

    #[tokio::test]
    async fn a_foreign_project_reads_as_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<projects::Model>::new()])
            .into_connection();

        let repo = MediaBindingRepositoryPostgres::new(Arc::new(db));
        let err = repo.find_project_cover(9, 42).await.unwrap_err();
        assert!(matches!(err, MediaBindingError::ProjectNotFound));
    }
}
