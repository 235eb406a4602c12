use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository,
};
use crate::modules::auth::application::services::password_policy::PasswordPolicy;

const REQUIRED_MESSAGE: &str = "This field is required.";
const WRONG_OLD_PASSWORD: &str =
    "Your old password was entered incorrectly. Please enter it again.";

// ====================== Change Password Request ======================
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub old_password: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
}

// ====================== Change Password Error ======================
#[derive(Debug)]
pub enum ChangePasswordError {
    Validation(BTreeMap<String, String>),
    UserNotFound,
    VerificationFailed(String),
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for ChangePasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangePasswordError::Validation(violations) => {
                write!(f, "Validation failed: {:?}", violations)
            }
            ChangePasswordError::UserNotFound => write!(f, "User not found"),
            ChangePasswordError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            ChangePasswordError::HashingFailed(msg) => {
                write!(f, "Password hashing failed: {}", msg)
            }
            ChangePasswordError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ChangePasswordError {}

// ====================== Change Password Use Case ======================
#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    /// `user_uuid` comes from the authenticated caller, never the body.
    async fn execute(
        &self,
        user_uuid: Uuid,
        request: ChangePasswordRequest,
    ) -> Result<(), ChangePasswordError>;
}

pub struct ChangePasswordUseCase<R, Q, H>
where
    R: UserRepository,
    Q: UserQuery,
    H: PasswordHasher,
{
    repository: R,
    query: Q,
    hasher: H,
}

impl<R, Q, H> ChangePasswordUseCase<R, Q, H>
where
    R: UserRepository,
    Q: UserQuery,
    H: PasswordHasher,
{
    pub fn new(repository: R, query: Q, hasher: H) -> Self {
        Self {
            repository,
            query,
            hasher,
        }
    }
}

#[async_trait]
impl<R, Q, H> IChangePasswordUseCase for ChangePasswordUseCase<R, Q, H>
where
    R: UserRepository,
    Q: UserQuery,
    H: PasswordHasher,
{
    async fn execute(
        &self,
        user_uuid: Uuid,
        request: ChangePasswordRequest,
    ) -> Result<(), ChangePasswordError> {
        let mut violations = BTreeMap::new();

        let old_password = request.old_password.as_deref().unwrap_or("");
        if old_password.is_empty() {
            violations.insert("old_password".to_string(), REQUIRED_MESSAGE.to_string());
        }
        let new_password = request.new_password.as_deref().unwrap_or("");
        if new_password.is_empty() {
            violations.insert("new_password".to_string(), REQUIRED_MESSAGE.to_string());
        }
        if !violations.is_empty() {
            return Err(ChangePasswordError::Validation(violations));
        }

        let user = self
            .query
            .find_by_uuid(user_uuid)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let old_matches = self
            .hasher
            .verify_password(old_password, &user.password_hash)
            .await
            .map_err(|e| ChangePasswordError::VerificationFailed(e.to_string()))?;
        if !old_matches {
            violations.insert("old_password".to_string(), WRONG_OLD_PASSWORD.to_string());
            return Err(ChangePasswordError::Validation(violations));
        }

        if let Some(first) = PasswordPolicy::validate(new_password, &user.username, &user.email)
            .into_iter()
            .next()
        {
            violations.insert("new_password".to_string(), first);
            return Err(ChangePasswordError::Validation(violations));
        }

        let new_hash = self
            .hasher
            .hash_password(new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user.uuid, new_hash)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))
    }
}
