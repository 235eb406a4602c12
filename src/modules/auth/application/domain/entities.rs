use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The role a user registered under. Immutable after creation; the
/// registering endpoint decides it, never the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Freelancer,
    Sponsor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Freelancer => "freelancer",
            Role::Sponsor => "sponsor",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "freelancer" => Some(Role::Freelancer),
            "sponsor" => Some(Role::Sponsor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Everything needed to create a user row and its matching profile row
/// in one transaction.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    /// "password" for regular registration, the provider name for SSO.
    pub provider: String,
    pub provider_user_id: Option<String>,
}

impl NewUser {
    pub fn with_password(
        username: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            role,
            provider: "password".to_string(),
            provider_user_id: None,
        }
    }
}

/// The public projection of a user, as login-shaped responses carry it.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserPublic {
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "freelancer")]
    pub role: Role,
    pub uuid: Uuid,
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            uuid: user.uuid,
        }
    }
}

/// An issued access/refresh pair with the computed expiry instants.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
    pub access_expiration: DateTime<Utc>,
    pub refresh_expiration: DateTime<Utc>,
}

/// One outstanding password-reset code. At most one exists per email.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordOtp {
    pub id: i64,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl PasswordOtp {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
