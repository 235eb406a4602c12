use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::FreelancerProfile;
use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileListFilter, ProfileQuery,
};

#[derive(Debug)]
pub enum ListProfilesError {
    QueryError(String),
}

impl fmt::Display for ListProfilesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListProfilesError::QueryError(e) => write!(f, "Query error: {}", e),
        }
    }
}

impl std::error::Error for ListProfilesError {}

#[async_trait]
pub trait IListFreelancerProfilesUseCase {
    async fn execute(
        &self,
        filter: ProfileListFilter,
    ) -> Result<Vec<FreelancerProfile>, ListProfilesError>;
}

pub struct ListFreelancerProfilesUseCase<Q: ProfileQuery> {
    profile_query: Arc<Q>,
}

impl<Q: ProfileQuery> ListFreelancerProfilesUseCase<Q> {
    pub fn new(profile_query: Arc<Q>) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q: ProfileQuery> IListFreelancerProfilesUseCase for ListFreelancerProfilesUseCase<Q> {
    async fn execute(
        &self,
        filter: ProfileListFilter,
    ) -> Result<Vec<FreelancerProfile>, ListProfilesError> {
        self.profile_query
            .list_freelancers(filter)
            .await
            .map_err(|e| ListProfilesError::QueryError(e.to_string()))
    }
}
