use std::sync::Arc;

use async_trait::async_trait;
use deadpool_redis::Pool;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::sso::application::ports::outgoing::{
    LoginStateError, LoginStateStore, PendingLogin,
};

/// How long a started login may wait for its callback.
const LOGIN_STATE_TTL_SECONDS: u64 = 600;

/// Redis-backed login-state store.
///
/// One key per pending login:
/// ```text
/// sso:login:{session_id} -> "{role}:{state}"
/// ```
/// GETDEL makes the take single-use in one round trip; the TTL covers
/// abandoned logins.
#[derive(Clone)]
pub struct RedisLoginStateStore {
    pool: Arc<Pool>,
}

impl RedisLoginStateStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(session_id: &str) -> String {
        format!("sso:login:{session_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, LoginStateError> {
        self.pool
            .get()
            .await
            .map_err(|e| LoginStateError::StoreError(format!("Pool error: {}", e)))
    }

    fn decode(raw: &str) -> Option<PendingLogin> {
        let (role, state) = raw.split_once(':')?;
        Some(PendingLogin {
            role: Role::parse(role)?,
            state: state.to_string(),
        })
    }
}

#[async_trait]
impl LoginStateStore for RedisLoginStateStore {
    async fn put(&self, session_id: &str, pending: PendingLogin) -> Result<(), LoginStateError> {
        let mut conn = self.get_conn().await?;

        let value = format!("{}:{}", pending.role.as_str(), pending.state);
        let _: () = deadpool_redis::redis::cmd("SET")
            .arg(Self::session_key(session_id))
            .arg(value)
            .arg("EX")
            .arg(LOGIN_STATE_TTL_SECONDS)
            .query_async(&mut *conn)
            .await
            .map_err(|e| LoginStateError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn take(&self, session_id: &str) -> Result<Option<PendingLogin>, LoginStateError> {
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = deadpool_redis::redis::cmd("GETDEL")
            .arg(Self::session_key(session_id))
            .query_async(&mut *conn)
            .await
            .map_err(|e| LoginStateError::StoreError(e.to_string()))?;

        Ok(raw.as_deref().and_then(Self::decode))
    }
}
