use crate::modules::auth::application::domain::entities::{NewUser, User};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Email already exists")]
    EmailTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user row and its role-matched profile row inside ONE
    /// transaction. Either both exist afterwards or neither does.
    async fn create_with_profile(&self, data: NewUser) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_uuid: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    /// Hard delete; the profile and its children go with the user via
    /// the cascading foreign keys.
    async fn delete_by_uuid(&self, user_uuid: Uuid) -> Result<(), UserRepositoryError>;
}
