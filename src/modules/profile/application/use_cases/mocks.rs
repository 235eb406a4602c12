use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    BasicProfile, BasicProfileChanges, FreelancerProfile, FreelancerProfileChanges,
    FreelancerProfileDetail, VocabKind,
};
use crate::modules::profile::application::ports::outgoing::attachment_repository::{
    AttachmentReport, AttachmentRepositoryError, VocabAttachmentRepository,
};
use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileListFilter, ProfileQuery, ProfileQueryError,
};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError,
};

pub fn sample_freelancer(uuid: Uuid) -> FreelancerProfile {
    FreelancerProfile {
        id: 7,
        uuid,
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        bio: None,
        about_me: None,
        location: None,
        profile_pic_url: None,
        resume_url: None,
    }
}

pub fn sample_admin(uuid: Uuid) -> BasicProfile {
    BasicProfile {
        id: 11,
        uuid,
        username: "root".to_string(),
        email: "root@example.com".to_string(),
        first_name: None,
        last_name: None,
        bio: None,
        profile_pic_url: None,
    }
}

#[derive(Default)]
pub struct MockProfileQuery {
    pub freelancers: Vec<FreelancerProfile>,
    pub admins: Vec<BasicProfile>,
    pub fail: bool,
}

impl MockProfileQuery {
    pub fn with_freelancer(profile: FreelancerProfile) -> Self {
        Self {
            freelancers: vec![profile],
            ..Self::default()
        }
    }

    pub fn with_admin(profile: BasicProfile) -> Self {
        Self {
            admins: vec![profile],
            ..Self::default()
        }
    }

    fn guard(&self) -> Result<(), ProfileQueryError> {
        if self.fail {
            Err(ProfileQueryError::DatabaseError("boom".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProfileQuery for MockProfileQuery {
    async fn list_freelancers(
        &self,
        _filter: ProfileListFilter,
    ) -> Result<Vec<FreelancerProfile>, ProfileQueryError> {
        self.guard()?;
        Ok(self.freelancers.clone())
    }

    async fn find_freelancer(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<FreelancerProfileDetail>, ProfileQueryError> {
        self.guard()?;
        Ok(self
            .freelancers
            .iter()
            .find(|p| p.uuid == user_uuid)
            .map(|p| FreelancerProfileDetail {
                profile: p.clone(),
                niches: vec![],
                skills: vec![],
                languages: vec![],
                links: vec![],
            }))
    }

    async fn freelancer_profile_id(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<i64>, ProfileQueryError> {
        self.guard()?;
        Ok(self
            .freelancers
            .iter()
            .find(|p| p.uuid == user_uuid)
            .map(|p| p.id))
    }

    async fn list_admins(
        &self,
        _filter: ProfileListFilter,
    ) -> Result<Vec<BasicProfile>, ProfileQueryError> {
        self.guard()?;
        Ok(self.admins.clone())
    }

    async fn find_admin(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<BasicProfile>, ProfileQueryError> {
        self.guard()?;
        Ok(self.admins.iter().find(|p| p.uuid == user_uuid).cloned())
    }

    async fn admin_profile_id(&self, user_uuid: Uuid) -> Result<Option<i64>, ProfileQueryError> {
        self.guard()?;
        Ok(self
            .admins
            .iter()
            .find(|p| p.uuid == user_uuid)
            .map(|p| p.id))
    }
}

#[derive(Default)]
pub struct MockProfileRepository {
    pub missing: bool,
    pub fail: bool,
    pub freelancer_updates: Mutex<Vec<(Uuid, FreelancerProfileChanges)>>,
    pub admin_updates: Mutex<Vec<(Uuid, BasicProfileChanges)>>,
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn update_freelancer(
        &self,
        user_uuid: Uuid,
        changes: FreelancerProfileChanges,
    ) -> Result<FreelancerProfile, ProfileRepositoryError> {
        if self.fail {
            return Err(ProfileRepositoryError::DatabaseError("boom".to_string()));
        }
        if self.missing {
            return Err(ProfileRepositoryError::NotFound);
        }
        let mut profile = sample_freelancer(user_uuid);
        profile.first_name = changes.first_name.clone().or(profile.first_name);
        self.freelancer_updates
            .lock()
            .unwrap()
            .push((user_uuid, changes));
        Ok(profile)
    }

    async fn update_admin(
        &self,
        user_uuid: Uuid,
        changes: BasicProfileChanges,
    ) -> Result<BasicProfile, ProfileRepositoryError> {
        if self.fail {
            return Err(ProfileRepositoryError::DatabaseError("boom".to_string()));
        }
        if self.missing {
            return Err(ProfileRepositoryError::NotFound);
        }
        let profile = sample_admin(user_uuid);
        self.admin_updates
            .lock()
            .unwrap()
            .push((user_uuid, changes));
        Ok(profile)
    }
}

/// Vocabulary table keyed by id; attach/detach bookkeeping in memory.
#[derive(Default)]
pub struct MockAttachmentRepository {
    pub vocab: HashMap<i64, String>,
    pub attached: Mutex<Vec<i64>>,
    pub fail: bool,
}

impl MockAttachmentRepository {
    pub fn with_vocab(entries: &[(i64, &str)]) -> Self {
        Self {
            vocab: entries
                .iter()
                .map(|(id, name)| (*id, name.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn already_attached(self, ids: &[i64]) -> Self {
        *self.attached.lock().unwrap() = ids.to_vec();
        self
    }
}

#[async_trait]
impl VocabAttachmentRepository for MockAttachmentRepository {
    async fn count_attached(
        &self,
        _profile_id: i64,
        _kind: VocabKind,
    ) -> Result<u64, AttachmentRepositoryError> {
        if self.fail {
            return Err(AttachmentRepositoryError::DatabaseError("boom".to_string()));
        }
        Ok(self.attached.lock().unwrap().len() as u64)
    }

    async fn attach_many(
        &self,
        _profile_id: i64,
        kind: VocabKind,
        ids: &[i64],
    ) -> Result<AttachmentReport, AttachmentRepositoryError> {
        if self.fail {
            return Err(AttachmentRepositoryError::DatabaseError("boom".to_string()));
        }
        let mut report = AttachmentReport::default();
        let mut attached = self.attached.lock().unwrap();
        for id in ids {
            match self.vocab.get(id) {
                None => report
                    .errors
                    .push(format!("{} with id {} does not exist.", kind.noun(), id)),
                Some(name) => {
                    if !attached.contains(id) {
                        attached.push(*id);
                        report.created.push(name.clone());
                    }
                }
            }
        }
        Ok(report)
    }

    async fn detach_many(
        &self,
        _profile_id: i64,
        kind: VocabKind,
        ids: &[i64],
    ) -> Result<AttachmentReport, AttachmentRepositoryError> {
        if self.fail {
            return Err(AttachmentRepositoryError::DatabaseError("boom".to_string()));
        }
        let mut report = AttachmentReport::default();
        let mut attached = self.attached.lock().unwrap();
        for id in ids {
            if !self.vocab.contains_key(id) {
                report
                    .errors
                    .push(format!("{} with id {} does not exist.", kind.noun(), id));
            } else if let Some(pos) = attached.iter().position(|a| a == id) {
                attached.remove(pos);
            } else {
                report.errors.push(format!(
                    "{} with id {} is not attached to this profile.",
                    kind.noun(),
                    id
                ));
            }
        }
        Ok(report)
    }
}
