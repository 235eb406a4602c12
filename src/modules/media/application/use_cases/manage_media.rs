use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::modules::media::application::domain::upload_policy::{
    UploadPolicy, UploadViolation, UploadedFile,
};
use crate::modules::media::application::ports::outgoing::media_binding_repository::{
    MediaBindingError, MediaBindingRepository, MediaRef,
};
use crate::modules::media::application::ports::outgoing::media_store::{
    MediaStore, MediaStoreError,
};
use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileQueryError,
};

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("User Unauthorized")]
    NotOwner,
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Project not found")]
    ProjectNotFound,
    #[error("No file provided")]
    NoFile,
    #[error("Unsupported file type")]
    UnsupportedType,
    #[error("File size exceeds the maximum limit of {0} MB.")]
    TooLarge(u64),
    #[error("User has no profile picture")]
    NoProfilePicture,
    #[error("User has no resume")]
    NoResume,
    #[error("Project has no cover image")]
    NoCoverImage,
    #[error("Media store error: {0}")]
    StoreError(String),
}

impl From<ProfileQueryError> for MediaError {
    fn from(e: ProfileQueryError) -> Self {
        MediaError::StoreError(e.to_string())
    }
}

impl From<MediaStoreError> for MediaError {
    fn from(e: MediaStoreError) -> Self {
        MediaError::StoreError(e.to_string())
    }
}

impl From<MediaBindingError> for MediaError {
    fn from(e: MediaBindingError) -> Self {
        match e {
            MediaBindingError::ProfileNotFound => MediaError::ProfileNotFound,
            MediaBindingError::ProjectNotFound => MediaError::ProjectNotFound,
            MediaBindingError::DatabaseError(msg) => MediaError::StoreError(msg),
        }
    }
}

impl From<UploadViolation> for MediaError {
    fn from(v: UploadViolation) -> Self {
        match v {
            UploadViolation::UnsupportedType => MediaError::UnsupportedType,
            UploadViolation::TooLarge(mb) => MediaError::TooLarge(mb),
        }
    }
}

/// File attachment operations, all owner-gated. Uploads return the
/// public URL of the freshly stored object.
#[async_trait]
pub trait IMediaUseCase {
    /// Upper bound the transport layer must hold multipart reads to.
    fn max_file_size_bytes(&self) -> u64;

    async fn upload_profile_picture(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        file: Option<UploadedFile>,
    ) -> Result<String, MediaError>;

    async fn delete_profile_picture(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
    ) -> Result<(), MediaError>;

    async fn upload_resume(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        file: Option<UploadedFile>,
    ) -> Result<String, MediaError>;

    async fn delete_resume(&self, caller_uuid: Uuid, profile_uuid: Uuid)
        -> Result<(), MediaError>;

    async fn upload_project_cover(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        project_id: i64,
        file: Option<UploadedFile>,
    ) -> Result<String, MediaError>;

    async fn delete_project_cover(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        project_id: i64,
    ) -> Result<(), MediaError>;
}

pub struct MediaUseCase<Q, B, S>
where
    Q: ProfileQuery,
    B: MediaBindingRepository,
    S: MediaStore,
{
    profiles: Q,
    bindings: B,
    store: S,
    image_policy: UploadPolicy,
    document_policy: UploadPolicy,
    folder: String,
}

impl<Q, B, S> MediaUseCase<Q, B, S>
where
    Q: ProfileQuery,
    B: MediaBindingRepository,
    S: MediaStore,
{
    pub fn new(
        profiles: Q,
        bindings: B,
        store: S,
        max_upload_size_bytes: u64,
        folder: String,
    ) -> Self {
        Self {
            profiles,
            bindings,
            store,
            image_policy: UploadPolicy::image(max_upload_size_bytes),
            document_policy: UploadPolicy::document(max_upload_size_bytes),
            folder,
        }
    }

    fn checked(
        policy: &UploadPolicy,
        file: Option<UploadedFile>,
    ) -> Result<UploadedFile, MediaError> {
        let file = file.ok_or(MediaError::NoFile)?;
        policy.check(&file)?;
        Ok(file)
    }

    /// Stale-object cleanup never fails the request; a failed delete
    /// leaves an orphan on the host, not a dangling URL in the
    /// database.
    async fn cleanup(&self, old: Option<MediaRef>) {
        if let Some(public_id) = old.and_then(|m| m.public_id) {
            if let Err(e) = self.store.delete(&public_id).await {
                warn!("Stale media object {} not deleted: {}", public_id, e);
            }
        }
    }

    async fn owned_profile(&self, caller_uuid: Uuid, profile_uuid: Uuid) -> Result<(), MediaError> {
        if caller_uuid != profile_uuid {
            return Err(MediaError::NotOwner);
        }
        Ok(())
    }

    async fn owned_profile_id(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
    ) -> Result<i64, MediaError> {
        self.owned_profile(caller_uuid, profile_uuid).await?;
        self.profiles
            .freelancer_profile_id(profile_uuid)
            .await?
            .ok_or(MediaError::ProfileNotFound)
    }
}

#[async_trait]
impl<Q, B, S> IMediaUseCase for MediaUseCase<Q, B, S>
where
    Q: ProfileQuery,
    B: MediaBindingRepository,
    S: MediaStore,
{
    fn max_file_size_bytes(&self) -> u64 {
        self.image_policy.max_file_size_bytes
    }

    async fn upload_profile_picture(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        file: Option<UploadedFile>,
    ) -> Result<String, MediaError> {
        self.owned_profile(caller_uuid, profile_uuid).await?;
        let file = Self::checked(&self.image_policy, file)?;
        let old = self.bindings.find_profile_picture(profile_uuid).await?;

        let stored = self
            .store
            .upload(file.bytes, &file.content_type, &self.folder)
            .await?;
        let url = stored.secure_url.clone();
        self.bindings
            .set_profile_picture(profile_uuid, Some(stored))
            .await?;
        self.cleanup(old).await;
        Ok(url)
    }

    async fn delete_profile_picture(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
    ) -> Result<(), MediaError> {
        self.owned_profile(caller_uuid, profile_uuid).await?;
        let old = self
            .bindings
            .find_profile_picture(profile_uuid)
            .await?
            .ok_or(MediaError::NoProfilePicture)?;
        self.bindings.set_profile_picture(profile_uuid, None).await?;
        self.cleanup(Some(old)).await;
        Ok(())
    }

    async fn upload_resume(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        file: Option<UploadedFile>,
    ) -> Result<String, MediaError> {
        self.owned_profile(caller_uuid, profile_uuid).await?;
        let file = Self::checked(&self.document_policy, file)?;
        let old = self.bindings.find_resume(profile_uuid).await?;

        let stored = self
            .store
            .upload(file.bytes, &file.content_type, &self.folder)
            .await?;
        let url = stored.secure_url.clone();
        self.bindings.set_resume(profile_uuid, Some(stored)).await?;
        self.cleanup(old).await;
        Ok(url)
    }

    async fn delete_resume(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
    ) -> Result<(), MediaError> {
        self.owned_profile(caller_uuid, profile_uuid).await?;
        let old = self
            .bindings
            .find_resume(profile_uuid)
            .await?
            .ok_or(MediaError::NoResume)?;
        self.bindings.set_resume(profile_uuid, None).await?;
        self.cleanup(Some(old)).await;
        Ok(())
    }

    async fn upload_project_cover(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        project_id: i64,
        file: Option<UploadedFile>,
    ) -> Result<String, MediaError> {
        let profile_id = self.owned_profile_id(caller_uuid, profile_uuid).await?;
        let file = Self::checked(&self.image_policy, file)?;
        let old = self
            .bindings
            .find_project_cover(profile_id, project_id)
            .await?;

        let stored = self
            .store
            .upload(file.bytes, &file.content_type, &self.folder)
            .await?;
        let url = stored.secure_url.clone();
        self.bindings
            .set_project_cover(profile_id, project_id, Some(stored))
            .await?;
        self.cleanup(old).await;
        Ok(url)
    }

    async fn delete_project_cover(
        &self,
        caller_uuid: Uuid,
        profile_uuid: Uuid,
        project_id: i64,
    ) -> Result<(), MediaError> {
        let profile_id = self.owned_profile_id(caller_uuid, profile_uuid).await?;
        let old = self
            .bindings
            .find_project_cover(profile_id, project_id)
            .await?
            .ok_or(MediaError::NoCoverImage)?;
        self.bindings
            .set_project_cover(profile_id, project_id, None)
            .await?;
        self.cleanup(Some(old)).await;
        Ok(())
    }
}
