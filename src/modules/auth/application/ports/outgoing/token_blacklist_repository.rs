use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenBlacklistError {
    /// The digest is already present. Logout is NOT idempotent; callers
    /// surface this distinctly.
    #[error("Token is already blacklisted")]
    AlreadyBlacklisted,
    #[error("Token is already expired")]
    AlreadyExpired,
    #[error("Store error: {0}")]
    StoreError(String),
}

/// Persistent refresh-token revocation list. Stores SHA-256 digests,
/// never raw tokens, and lets entries expire with the token itself.
#[async_trait]
pub trait TokenBlacklistRepository: Send + Sync {
    async fn blacklist(
        &self,
        token_digest: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError>;

    async fn is_blacklisted(&self, token_digest: &str) -> Result<bool, TokenBlacklistError>;
}
