use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    VocabKind, MAX_NICHES_PER_FREELANCER,
};
use crate::modules::profile::application::ports::outgoing::attachment_repository::{
    AttachmentReport, VocabAttachmentRepository,
};
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

#[derive(Debug)]
pub enum AttachError {
    ProfileNotFound,
    NicheLimitExceeded,
    StoreError(String),
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachError::ProfileNotFound => write!(f, "Profile not found"),
            AttachError::NicheLimitExceeded => write!(f, "Maximum of 3 Niches Per user."),
            AttachError::StoreError(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for AttachError {}

#[async_trait]
pub trait IAttachVocabulariesUseCase {
    async fn execute(
        &self,
        profile_uuid: Uuid,
        kind: VocabKind,
        ids: Vec<i64>,
    ) -> Result<AttachmentReport, AttachError>;
}

pub struct AttachVocabulariesUseCase<Q: ProfileQuery, A: VocabAttachmentRepository> {
    profile_query: Arc<Q>,
    attachments: Arc<A>,
}

impl<Q: ProfileQuery, A: VocabAttachmentRepository> AttachVocabulariesUseCase<Q, A> {
    pub fn new(profile_query: Arc<Q>, attachments: Arc<A>) -> Self {
        Self {
            profile_query,
            attachments,
        }
    }
}

#[async_trait]
impl<Q: ProfileQuery, A: VocabAttachmentRepository> IAttachVocabulariesUseCase
    for AttachVocabulariesUseCase<Q, A>
{
    async fn execute(
        &self,
        profile_uuid: Uuid,
        kind: VocabKind,
        ids: Vec<i64>,
    ) -> Result<AttachmentReport, AttachError> {
        let profile_id = self
            .profile_query
            .freelancer_profile_id(profile_uuid)
            .await
            .map_err(|e| AttachError::StoreError(e.to_string()))?
            .ok_or(AttachError::ProfileNotFound)?;

        // The cap is checked before anything is written; an over-limit
        // request must leave zero rows behind.
        if kind == VocabKind::Niche {
            let current = self
                .attachments
                .count_attached(profile_id, kind)
                .await
                .map_err(|e| AttachError::StoreError(e.to_string()))?;
            if current + ids.len() as u64 > MAX_NICHES_PER_FREELANCER {
                return Err(AttachError::NicheLimitExceeded);
            }
        }

        self.attachments
            .attach_many(profile_id, kind, &ids)
            .await
            .map_err(|e| AttachError::StoreError(e.to_string()))
    }
}
