use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistRepository, TokenError, TokenProvider,
};
use crate::modules::auth::application::services::token_digest::digest_token;

// ====================== Refresh Request ======================
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh: Option<String>,
}

// ====================== Refresh Error ======================
#[derive(Debug, PartialEq)]
pub enum RefreshError {
    MissingToken,
    InvalidToken,
    Blacklisted,
    StoreError(String),
    TokenGenerationFailed(String),
}

impl std::fmt::Display for RefreshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshError::MissingToken => {
                write!(f, "Refresh token was not included in request data.")
            }
            RefreshError::InvalidToken => write!(f, "Token is invalid or expired"),
            RefreshError::Blacklisted => write!(f, "Token is blacklisted"),
            RefreshError::StoreError(msg) => write!(f, "Store error: {}", msg),
            RefreshError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for RefreshError {}

// ====================== Refresh Response ======================
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RefreshTokenResponse {
    pub access: String,
    pub access_expiration: chrono::DateTime<chrono::Utc>,
}

// ====================== Refresh Token Use Case ======================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, request: RefreshRequest) -> Result<RefreshTokenResponse, RefreshError>;
}

pub struct RefreshTokenUseCase<T, B>
where
    T: TokenProvider,
    B: TokenBlacklistRepository,
{
    tokens: T,
    blacklist: B,
}

impl<T, B> RefreshTokenUseCase<T, B>
where
    T: TokenProvider,
    B: TokenBlacklistRepository,
{
    pub fn new(tokens: T, blacklist: B) -> Self {
        Self { tokens, blacklist }
    }
}

#[async_trait]
impl<T, B> IRefreshTokenUseCase for RefreshTokenUseCase<T, B>
where
    T: TokenProvider,
    B: TokenBlacklistRepository,
{
    async fn execute(&self, request: RefreshRequest) -> Result<RefreshTokenResponse, RefreshError> {
        let refresh = match request.refresh.as_deref() {
            Some(token) if !token.trim().is_empty() => token.trim(),
            _ => return Err(RefreshError::MissingToken),
        };

        let claims = self.tokens.verify(refresh).map_err(|e| match e {
            TokenError::EncodingError(msg) => RefreshError::TokenGenerationFailed(msg),
            _ => RefreshError::InvalidToken,
        })?;
        if claims.token_type != "refresh" {
            return Err(RefreshError::InvalidToken);
        }
        let role = claims.role().ok_or(RefreshError::InvalidToken)?;

        // A logged-out token must not mint new access tokens.
        let revoked = self
            .blacklist
            .is_blacklisted(&digest_token(refresh))
            .await
            .map_err(|e| RefreshError::StoreError(e.to_string()))?;
        if revoked {
            return Err(RefreshError::Blacklisted);
        }

        let (access, access_expiration) = self
            .tokens
            .issue_access(claims.sub, role)
            .map_err(|e| RefreshError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshTokenResponse {
            access,
            access_expiration,
        })
    }
}
