use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistError, TokenBlacklistRepository, TokenProvider,
};
use crate::modules::auth::application::services::token_digest::digest_token;

// ====================== Logout Request ======================
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct LogoutRequest {
    #[serde(default)]
    pub refresh: Option<String>,
}

// ====================== Logout Error ======================
#[derive(Debug, PartialEq)]
pub enum LogoutError {
    /// No `refresh` field in the body.
    MissingToken,
    /// Bad signature, wrong type, or past its expiry.
    InvalidToken,
    /// Second logout with the same token. Deliberately distinct from
    /// success: logout is not idempotent.
    AlreadyBlacklisted,
    StoreError(String),
}

impl std::fmt::Display for LogoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoutError::MissingToken => {
                write!(f, "Refresh token was not included in request data.")
            }
            LogoutError::InvalidToken => write!(f, "Token is invalid or expired"),
            LogoutError::AlreadyBlacklisted => write!(f, "Token is blacklisted"),
            LogoutError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for LogoutError {}

// ====================== Logout Use Case ======================
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<(), LogoutError>;
}

pub struct LogoutUseCase<T, B>
where
    T: TokenProvider,
    B: TokenBlacklistRepository,
{
    tokens: T,
    blacklist: B,
}

impl<T, B> LogoutUseCase<T, B>
where
    T: TokenProvider,
    B: TokenBlacklistRepository,
{
    pub fn new(tokens: T, blacklist: B) -> Self {
        Self { tokens, blacklist }
    }
}

#[async_trait]
impl<T, B> ILogoutUseCase for LogoutUseCase<T, B>
where
    T: TokenProvider,
    B: TokenBlacklistRepository,
{
    async fn execute(&self, request: LogoutRequest) -> Result<(), LogoutError> {
        let refresh = match request.refresh.as_deref() {
            Some(token) if !token.trim().is_empty() => token.trim(),
            _ => return Err(LogoutError::MissingToken),
        };

        let claims = self
            .tokens
            .verify(refresh)
            .map_err(|_| LogoutError::InvalidToken)?;
        if claims.token_type != "refresh" {
            return Err(LogoutError::InvalidToken);
        }

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or(LogoutError::InvalidToken)?;

        // The digest only needs to survive until the token itself dies.
        self.blacklist
            .blacklist(digest_token(refresh), expires_at)
            .await
            .map_err(|e| match e {
                TokenBlacklistError::AlreadyBlacklisted => LogoutError::AlreadyBlacklisted,
                TokenBlacklistError::AlreadyExpired => LogoutError::InvalidToken,
                TokenBlacklistError::StoreError(msg) => LogoutError::StoreError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::auth::application::use_cases::mocks::{
        MockTokenBlacklist, MockTokenProvider,
    };
    use chrono::Duration;
    use uuid::Uuid;

    const REFRESH: &str = "valid.refresh.token";

    fn provider_with_refresh() -> MockTokenProvider {
        MockTokenProvider::new().with_valid_token(
            REFRESH,
            Uuid::new_v4(),
            Role::Freelancer,
            "refresh",
            Utc::now() + Duration::days(7),
        )
    }

    fn request(refresh: Option<&str>) -> LogoutRequest {
        LogoutRequest {
            refresh: refresh.map(|s| s.to_string()),
        }
    }

    #[tokio::test]
    async fn blacklists_a_valid_refresh_token() {
        let use_case = LogoutUseCase::new(provider_with_refresh(), MockTokenBlacklist::new());

        use_case.execute(request(Some(REFRESH))).await.unwrap();

        let listed = use_case.blacklist.listed.lock().unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed.contains(&digest_token(REFRESH)));
    }

    #[tokio::test]
    async fn missing_token_is_rejected() {
        let use_case = LogoutUseCase::new(provider_with_refresh(), MockTokenBlacklist::new());

        let err = use_case.execute(request(None)).await.unwrap_err();
        assert_eq!(err, LogoutError::MissingToken);
        assert_eq!(
            err.to_string(),
            "Refresh token was not included in request data."
        );
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let use_case = LogoutUseCase::new(provider_with_refresh(), MockTokenBlacklist::new());

        let err = use_case.execute(request(Some("garbage"))).await.unwrap_err();
        assert_eq!(err, LogoutError::InvalidToken);
    }

    #[tokio::test]
    async fn access_token_cannot_be_logged_out() {
        let provider = MockTokenProvider::new().with_valid_token(
            "an.access.token",
            Uuid::new_v4(),
            Role::Freelancer,
            "access",
            Utc::now() + Duration::hours(5),
        );
        let use_case = LogoutUseCase::new(provider, MockTokenBlacklist::new());

        let err = use_case
            .execute(request(Some("an.access.token")))
            .await
            .unwrap_err();
        assert_eq!(err, LogoutError::InvalidToken);
    }

    #[tokio::test]
    async fn second_logout_fails_as_blacklisted() {
        let use_case = LogoutUseCase::new(provider_with_refresh(), MockTokenBlacklist::new());

        use_case.execute(request(Some(REFRESH))).await.unwrap();
        let err = use_case.execute(request(Some(REFRESH))).await.unwrap_err();

        assert_eq!(err, LogoutError::AlreadyBlacklisted);
        assert_eq!(err.to_string(), "Token is blacklisted");
    }
}
