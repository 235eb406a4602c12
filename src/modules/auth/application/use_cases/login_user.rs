use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::auth::application::domain::entities::{User, UserPublic};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery,
};

const REQUIRED_MESSAGE: &str = "This field is required.";

// ====================== Login Request ======================
/// Raw login payload; the caller supplies a username or an email plus
/// the password.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

enum Identifier {
    Username(String),
    Email(String),
}

impl LoginRequest {
    fn validate(&self) -> Result<(Identifier, String), BTreeMap<String, String>> {
        let mut violations = BTreeMap::new();

        let username = self.username.as_deref().unwrap_or("").trim().to_string();
        let email = self.email.as_deref().unwrap_or("").trim().to_lowercase();
        let password = self.password.as_deref().unwrap_or("").to_string();

        if password.is_empty() {
            violations.insert("password".to_string(), REQUIRED_MESSAGE.to_string());
        }

        let identifier = match (username.is_empty(), email.is_empty()) {
            (false, true) => Some(Identifier::Username(username)),
            (true, false) => Some(Identifier::Email(email)),
            (true, true) => {
                violations.insert("username".to_string(), REQUIRED_MESSAGE.to_string());
                None
            }
            (false, false) => {
                violations.insert(
                    "non_field_errors".to_string(),
                    "Provide a username or an email, not both.".to_string(),
                );
                None
            }
        };

        match identifier {
            Some(id) if violations.is_empty() => Ok((id, password)),
            _ => Err(violations),
        }
    }
}

// ====================== Login Error ======================
#[derive(Debug)]
pub enum LoginError {
    Validation(BTreeMap<String, String>),
    /// Unknown identifier, wrong password and inactive account all look
    /// the same to the caller.
    InvalidCredentials,
    VerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::Validation(violations) => write!(f, "Validation failed: {:?}", violations),
            LoginError::InvalidCredentials => write!(f, "Incorrect password."),
            LoginError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ====================== Login Response ======================
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LoginUserResponse {
    pub user: UserPublic,
    pub access: String,
    pub refresh: String,
    pub access_expiration: chrono::DateTime<chrono::Utc>,
    pub refresh_expiration: chrono::DateTime<chrono::Utc>,
}

// ====================== Login User Use Case ======================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase<Q, H, T>
where
    Q: UserQuery,
    H: PasswordHasher,
    T: TokenProvider,
{
    query: Q,
    hasher: H,
    tokens: T,
}

impl<Q, H, T> LoginUserUseCase<Q, H, T>
where
    Q: UserQuery,
    H: PasswordHasher,
    T: TokenProvider,
{
    pub fn new(query: Q, hasher: H, tokens: T) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }

    async fn find_user(&self, identifier: &Identifier) -> Result<Option<User>, LoginError> {
        let found = match identifier {
            Identifier::Username(username) => self.query.find_by_username(username).await,
            Identifier::Email(email) => self.query.find_by_email(email).await,
        };
        found.map_err(|e| LoginError::QueryError(e.to_string()))
    }
}

#[async_trait]
impl<Q, H, T> ILoginUserUseCase for LoginUserUseCase<Q, H, T>
where
    Q: UserQuery,
    H: PasswordHasher,
    T: TokenProvider,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let (identifier, password) = request.validate().map_err(LoginError::Validation)?;

        let user = self
            .find_user(&identifier)
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        if !user.is_active {
            return Err(LoginError::InvalidCredentials);
        }

        let is_valid = self
            .hasher
            .verify_password(&password, &user.password_hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;
        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let pair = self
            .tokens
            .issue_pair(&user)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            user: UserPublic::from(&user),
            access: pair.access,
            refresh: pair.refresh,
            access_expiration: pair.access_expiration,
            refresh_expiration: pair.refresh_expiration,
        })
    }
}
