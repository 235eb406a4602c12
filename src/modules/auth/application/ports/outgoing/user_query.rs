use crate::modules::auth::application::domain::entities::User;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<User>, UserQueryError>;

    /// The signup provider recorded on the user's profile row
    /// ("password", "google", ...). Used by the SSO wrong-provider check.
    async fn signup_provider(&self, user: &User) -> Result<Option<String>, UserQueryError>;
}
