use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::modules::auth::application::domain::entities::{NewUser, Role, UserPublic};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};
use crate::modules::auth::application::services::password_policy::PasswordPolicy;

const USERNAME_MAX_LENGTH: usize = 150;
const REQUIRED_MESSAGE: &str = "This field is required.";

fn username_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\w.@+-]+$").expect("username regex"))
}

// ====================== Register Request ======================
/// Raw registration payload. Fields are optional so that validation can
/// aggregate every violation instead of failing at deserialization.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Field name -> first violated rule, in field-name order.
pub type FieldViolations = BTreeMap<String, String>;

struct ValidatedRegistration {
    username: String,
    email: String,
    password: String,
}

impl RegisterRequest {
    /// Local (non-database) validation. Uniqueness is checked separately.
    fn validate(&self) -> (Option<ValidatedRegistration>, FieldViolations) {
        let mut violations = FieldViolations::new();

        let username = self.username.as_deref().unwrap_or("").trim().to_string();
        if username.is_empty() {
            violations.insert("username".to_string(), REQUIRED_MESSAGE.to_string());
        } else if !username_pattern().is_match(&username) {
            violations.insert(
                "username".to_string(),
                "Enter a valid username. This value may contain only letters, numbers, \
                 and @/./+/-/_ characters."
                    .to_string(),
            );
        } else if username.len() > USERNAME_MAX_LENGTH {
            violations.insert(
                "username".to_string(),
                format!(
                    "Ensure this field has no more than {} characters.",
                    USERNAME_MAX_LENGTH
                ),
            );
        }

        let email = self
            .email
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase();
        if email.is_empty() {
            violations.insert("email".to_string(), REQUIRED_MESSAGE.to_string());
        } else if !email_address::EmailAddress::is_valid(&email) {
            violations.insert(
                "email".to_string(),
                "Enter a valid email address.".to_string(),
            );
        }

        let password = self.password.as_deref().unwrap_or("").to_string();
        if password.is_empty() {
            violations.insert("password".to_string(), REQUIRED_MESSAGE.to_string());
        } else if let Some(first) =
            PasswordPolicy::validate(&password, &username, &email).into_iter().next()
        {
            violations.insert("password".to_string(), first);
        }

        if violations.is_empty() {
            (
                Some(ValidatedRegistration {
                    username,
                    email,
                    password,
                }),
                violations,
            )
        } else {
            (None, violations)
        }
    }
}

// ====================== Register Error ======================
#[derive(Debug)]
pub enum RegisterError {
    Validation(FieldViolations),
    HashingFailed(String),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::Validation(violations) => {
                write!(f, "Validation failed: {:?}", violations)
            }
            RegisterError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RegisterError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterError {}

// ====================== Register Response ======================
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RegisterUserResponse {
    pub user: UserPublic,
    pub refresh: String,
    pub access: String,
}

// ====================== Register User Use Case ======================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    /// The role comes from the endpoint, never from the body.
    async fn execute(
        &self,
        role: Role,
        request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError>;
}

pub struct RegisterUserUseCase<R, Q, H, T>
where
    R: UserRepository,
    Q: UserQuery,
    H: PasswordHasher,
    T: TokenProvider,
{
    repository: R,
    query: Q,
    hasher: H,
    tokens: T,
}

impl<R, Q, H, T> RegisterUserUseCase<R, Q, H, T>
where
    R: UserRepository,
    Q: UserQuery,
    H: PasswordHasher,
    T: TokenProvider,
{
    pub fn new(repository: R, query: Q, hasher: H, tokens: T) -> Self {
        Self {
            repository,
            query,
            hasher,
            tokens,
        }
    }
}

fn username_taken() -> String {
    "A user with that username already exists.".to_string()
}

fn email_taken() -> String {
    "A user with that email already exists.".to_string()
}

#[async_trait]
impl<R, Q, H, T> IRegisterUserUseCase for RegisterUserUseCase<R, Q, H, T>
where
    R: UserRepository,
    Q: UserQuery,
    H: PasswordHasher,
    T: TokenProvider,
{
    async fn execute(
        &self,
        role: Role,
        request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError> {
        let (validated, mut violations) = request.validate();

        // Uniqueness joins the aggregated report rather than failing alone.
        if let Some(v) = &validated {
            let by_username = self
                .query
                .find_by_username(&v.username)
                .await
                .map_err(|e| RegisterError::RepositoryError(e.to_string()))?;
            if by_username.is_some() {
                violations.insert("username".to_string(), username_taken());
            }

            let by_email = self
                .query
                .find_by_email(&v.email)
                .await
                .map_err(|e| RegisterError::RepositoryError(e.to_string()))?;
            if by_email.is_some() {
                violations.insert("email".to_string(), email_taken());
            }
        }

        if !violations.is_empty() {
            return Err(RegisterError::Validation(violations));
        }
        let v = validated.expect("validated payload present when no violations");

        let password_hash = self
            .hasher
            .hash_password(&v.password)
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        // One transaction inside the repository: user row + profile row.
        let user = self
            .repository
            .create_with_profile(NewUser::with_password(
                v.username,
                v.email,
                password_hash,
                role,
            ))
            .await
            .map_err(|e| match e {
                // Lost the race with a concurrent registration.
                UserRepositoryError::UsernameTaken => RegisterError::Validation(
                    FieldViolations::from([("username".to_string(), username_taken())]),
                ),
                UserRepositoryError::EmailTaken => RegisterError::Validation(
                    FieldViolations::from([("email".to_string(), email_taken())]),
                ),
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        let pair = self
            .tokens
            .issue_pair(&user)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        Ok(RegisterUserResponse {
            user: UserPublic::from(&user),
            refresh: pair.refresh,
            access: pair.access,
        })
    }
}
