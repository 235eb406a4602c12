use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::FreelancerProfileDetail;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileQuery;

#[derive(Debug)]
pub enum GetProfileError {
    NotFound,
    QueryError(String),
}

impl fmt::Display for GetProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProfileError::NotFound => write!(f, "Profile not found"),
            GetProfileError::QueryError(e) => write!(f, "Query error: {}", e),
        }
    }
}

impl std::error::Error for GetProfileError {}

#[async_trait]
pub trait IGetFreelancerProfileUseCase {
    async fn execute(&self, user_uuid: Uuid)
        -> Result<FreelancerProfileDetail, GetProfileError>;
}

pub struct GetFreelancerProfileUseCase<Q: ProfileQuery> {
    profile_query: Arc<Q>,
}

impl<Q: ProfileQuery> GetFreelancerProfileUseCase<Q> {
    pub fn new(profile_query: Arc<Q>) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q: ProfileQuery> IGetFreelancerProfileUseCase for GetFreelancerProfileUseCase<Q> {
    async fn execute(
        &self,
        user_uuid: Uuid,
    ) -> Result<FreelancerProfileDetail, GetProfileError> {
        self.profile_query
            .find_freelancer(user_uuid)
            .await
            .map_err(|e| GetProfileError::QueryError(e.to_string()))?
            .ok_or(GetProfileError::NotFound)
    }
}
