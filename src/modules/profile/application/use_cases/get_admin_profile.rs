use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::BasicProfile;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;
use crate::modules::profile::application::use_cases::get_freelancer_profile::GetProfileError;

#[async_trait]
pub trait IGetAdminProfileUseCase {
    async fn execute(&self, user_uuid: Uuid) -> Result<BasicProfile, GetProfileError>;
}

pub struct GetAdminProfileUseCase<Q: ProfileQuery> {
    profile_query: Arc<Q>,
}

impl<Q: ProfileQuery> GetAdminProfileUseCase<Q> {
    pub fn new(profile_query: Arc<Q>) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q: ProfileQuery> IGetAdminProfileUseCase for GetAdminProfileUseCase<Q> {
    async fn execute(&self, user_uuid: Uuid) -> Result<BasicProfile, GetProfileError> {
        self.profile_query
            .find_admin(user_uuid)
            .await
            .map_err(|e| GetProfileError::QueryError(e.to_string()))?
            .ok_or(GetProfileError::NotFound)
    }
}
