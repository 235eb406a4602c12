use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistError, TokenBlacklistRepository,
};

/// Redis-backed refresh-token revocation list.
///
/// One key per token digest:
/// ```text
/// auth:blacklist:token:{digest} -> "1"
/// ```
/// The key TTL matches the token's own expiry, so Redis does the
/// cleanup and a lookup stays O(1).
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(digest: &str) -> String {
        format!("auth:blacklist:token:{digest}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenBlacklistError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::StoreError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenBlacklistRepository for RedisTokenBlacklist {
    async fn blacklist(
        &self,
        token_digest: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(TokenBlacklistError::AlreadyExpired);
        }

        let mut conn = self.get_conn().await?;

        // SET NX detects the double-logout case in one round trip: nil
        // means the digest was already present.
        let stored: Option<String> = deadpool_redis::redis::cmd("SET")
            .arg(Self::token_key(&token_digest))
            .arg("1")
            .arg("NX")
            .arg("EX")
            .arg(ttl)
            .query_async(&mut *conn)
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        match stored {
            Some(_) => Ok(()),
            None => Err(TokenBlacklistError::AlreadyBlacklisted),
        }
    }

    async fn is_blacklisted(&self, token_digest: &str) -> Result<bool, TokenBlacklistError> {
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(Self::token_key(token_digest))
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        Ok(exists)
    }
}
