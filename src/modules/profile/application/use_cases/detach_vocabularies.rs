use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::VocabKind;
use crate::modules::profile::application::ports::outgoing::attachment_repository::{
    AttachmentReport, VocabAttachmentRepository,
};
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

#[derive(Debug)]
pub enum DetachError {
    ProfileNotFound,
    StoreError(String),
}

impl fmt::Display for DetachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetachError::ProfileNotFound => write!(f, "Profile not found"),
            DetachError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for DetachError {}

#[async_trait]
pub trait IDetachVocabulariesUseCase {
    async fn execute(
        &self,
        profile_uuid: Uuid,
        kind: VocabKind,
        ids: Vec<i64>,
    ) -> Result<AttachmentReport, DetachError>;
}

pub struct DetachVocabulariesUseCase<Q: ProfileQuery, A: VocabAttachmentRepository> {
    profile_query: Arc<Q>,
    attachments: Arc<A>,
}

impl<Q: ProfileQuery, A: VocabAttachmentRepository> DetachVocabulariesUseCase<Q, A> {
    pub fn new(profile_query: Arc<Q>, attachments: Arc<A>) -> Self {
        Self {
            profile_query,
            attachments,
        }
    }
}

#[async_trait]
impl<Q: ProfileQuery, A: VocabAttachmentRepository> IDetachVocabulariesUseCase
    for DetachVocabulariesUseCase<Q, A>
{
    async fn execute(
        &self,
        profile_uuid: Uuid,
        kind: VocabKind,
        ids: Vec<i64>,
    ) -> Result<AttachmentReport, DetachError> {
        let profile_id = self
            .profile_query
            .freelancer_profile_id(profile_uuid)
            .await
            .map_err(|e| DetachError::StoreError(e.to_string()))?
            .ok_or(DetachError::ProfileNotFound)?;

        self.attachments
            .detach_many(profile_id, kind, &ids)
            .await
            .map_err(|e| DetachError::StoreError(e.to_string()))
    }
}
