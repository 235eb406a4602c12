use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::media::application::ports::outgoing::media_binding_repository::{
    MediaBindingError, MediaBindingRepository, MediaRef,
};
use crate::modules::media::application::ports::outgoing::media_store::{
    MediaStore, MediaStoreError, StoredMedia,
};

/// In-memory bindings; `set_*` calls land in the matching slot so
/// tests can assert what was persisted.
#[derive(Default)]
pub struct MockMediaBindingRepository {
    pub pictures: Mutex<Option<StoredMedia>>,
    pub resumes: Mutex<Option<StoredMedia>>,
    pub covers: Mutex<Option<StoredMedia>>,
    pub existing_picture: Option<MediaRef>,
    pub existing_resume: Option<MediaRef>,
    pub existing_cover: Option<MediaRef>,
    pub missing_profile: bool,
    pub missing_project: bool,
    pub fail: bool,
}

impl MockMediaBindingRepository {
    pub fn with_picture(media: MediaRef) -> Self {
        Self {
            existing_picture: Some(media),
            ..Self::default()
        }
    }

    pub fn with_resume(media: MediaRef) -> Self {
        Self {
            existing_resume: Some(media),
            ..Self::default()
        }
    }

    pub fn with_cover(media: MediaRef) -> Self {
        Self {
            existing_cover: Some(media),
            ..Self::default()
        }
    }

    fn guard_profile(&self) -> Result<(), MediaBindingError> {
        if self.fail {
            return Err(MediaBindingError::DatabaseError("boom".to_string()));
        }
        if self.missing_profile {
            return Err(MediaBindingError::ProfileNotFound);
        }
        Ok(())
    }

    fn guard_project(&self) -> Result<(), MediaBindingError> {
        if self.fail {
            return Err(MediaBindingError::DatabaseError("boom".to_string()));
        }
        if self.missing_project {
            return Err(MediaBindingError::ProjectNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MediaBindingRepository for MockMediaBindingRepository {
    async fn find_profile_picture(
        &self,
        _user_uuid: Uuid,
    ) -> Result<Option<MediaRef>, MediaBindingError> {
        self.guard_profile()?;
        Ok(self.existing_picture.clone())
    }

    async fn set_profile_picture(
        &self,
        _user_uuid: Uuid,
        media: Option<StoredMedia>,
    ) -> Result<(), MediaBindingError> {
        self.guard_profile()?;
        *self.pictures.lock().unwrap() = media;
        Ok(())
    }

    async fn find_resume(&self, _user_uuid: Uuid) -> Result<Option<MediaRef>, MediaBindingError> {
        self.guard_profile()?;
        Ok(self.existing_resume.clone())
    }

    async fn set_resume(
        &self,
        _user_uuid: Uuid,
        media: Option<StoredMedia>,
    ) -> Result<(), MediaBindingError> {
        self.guard_profile()?;
        *self.resumes.lock().unwrap() = media;
        Ok(())
    }

    async fn find_project_cover(
        &self,
        _profile_id: i64,
        _project_id: i64,
    ) -> Result<Option<MediaRef>, MediaBindingError> {
        self.guard_project()?;
        Ok(self.existing_cover.clone())
    }

    async fn set_project_cover(
        &self,
        _profile_id: i64,
        _project_id: i64,
        media: Option<StoredMedia>,
    ) -> Result<(), MediaBindingError> {
        self.guard_project()?;
        *self.covers.lock().unwrap() = media;
        Ok(())
    }
}

/// Fake media host. Uploaded objects get deterministic names derived
/// from the upload count.
#[derive(Default)]
pub struct MockMediaStore {
    pub uploads: Mutex<Vec<(usize, String, String)>>,
    pub deleted: Mutex<Vec<String>>,
    pub fail: bool,
}

#[async_trait]
impl MediaStore for MockMediaStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        folder: &str,
    ) -> Result<StoredMedia, MediaStoreError> {
        if self.fail {
            return Err(MediaStoreError::UploadFailed("boom".to_string()));
        }
        let mut uploads = self.uploads.lock().unwrap();
        let n = uploads.len() + 1;
        uploads.push((bytes.len(), content_type.to_string(), folder.to_string()));
        let public_id = format!("{}/object-{}", folder, n);
        Ok(StoredMedia {
            secure_url: format!("https://storage.googleapis.com/test-bucket/{}", public_id),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), MediaStoreError> {
        if self.fail {
            return Err(MediaStoreError::DeleteFailed("boom".to_string()));
        }
        self.deleted.lock().unwrap().push(public_id.to_string());
        Ok(())
    }
}
