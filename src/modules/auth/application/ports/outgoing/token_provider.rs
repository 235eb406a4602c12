use crate::modules::auth::application::domain::entities::{Role, TokenPair, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claims carried by both token types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// The user's external UUID.
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    /// "access" or "refresh".
    pub token_type: String,
    pub role: String,
}

impl TokenClaims {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

pub trait TokenProvider: Send + Sync {
    /// Issues a fresh access/refresh pair with computed expirations.
    fn issue_pair(&self, user: &User) -> Result<TokenPair, TokenError>;

    /// Issues a single access token (used by the refresh endpoint).
    fn issue_access(&self, user_uuid: Uuid, role: Role) -> Result<(String, chrono::DateTime<chrono::Utc>), TokenError>;

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
