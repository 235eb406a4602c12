use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::BasicProfile;
use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileListFilter, ProfileQuery,
};
use crate::modules::profile::application::use_cases::list_freelancer_profiles::ListProfilesError;

#[async_trait]
pub trait IListAdminProfilesUseCase {
    async fn execute(
        &self,
        filter: ProfileListFilter,
    ) -> Result<Vec<BasicProfile>, ListProfilesError>;
}

pub struct ListAdminProfilesUseCase<Q: ProfileQuery> {
    profile_query: Arc<Q>,
}

impl<Q: ProfileQuery> ListAdminProfilesUseCase<Q> {
    pub fn new(profile_query: Arc<Q>) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q: ProfileQuery> IListAdminProfilesUseCase for ListAdminProfilesUseCase<Q> {
    async fn execute(
        &self,
        filter: ProfileListFilter,
    ) -> Result<Vec<BasicProfile>, ListProfilesError> {
        self.profile_query
            .list_admins(filter)
            .await
            .map_err(|e| ListProfilesError::QueryError(e.to_string()))
    }
}
