use async_trait::async_trait;
use thiserror::Error;

use crate::modules::auth::application::domain::entities::Role;

#[derive(Debug, Error)]
pub enum LoginStateError {
    #[error("Login state store error: {0}")]
    StoreError(String),
}

/// What the start leg parked for the callback leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogin {
    pub state: String,
    pub role: Role,
}

/// Short-lived, single-use storage keyed by an opaque session id. The
/// entry lives in a shared store so any instance can serve the
/// callback.
#[async_trait]
pub trait LoginStateStore: Send + Sync {
    async fn put(&self, session_id: &str, pending: PendingLogin) -> Result<(), LoginStateError>;

    /// Removes and returns the entry; a second take of the same id
    /// yields `None`.
    async fn take(&self, session_id: &str) -> Result<Option<PendingLogin>, LoginStateError>;
}
