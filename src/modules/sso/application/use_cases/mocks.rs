use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::sso::application::ports::outgoing::{
    LoginStateError, LoginStateStore, OAuthProvider, OAuthProviderError, OAuthUser, PendingLogin,
};

/// Provider double; `exchange_code` resolves to a fixed identity.
pub struct MockOAuthProvider {
    pub identity: OAuthUser,
    pub fail_exchange: bool,
    pub exchanged: Mutex<Vec<String>>,
}

impl MockOAuthProvider {
    pub fn with_identity(identity: OAuthUser) -> Self {
        Self {
            identity,
            fail_exchange: false,
            exchanged: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl OAuthProvider for MockOAuthProvider {
    fn authorization_url(&self, state: &str) -> String {
        format!("https://accounts.example/o/oauth2/auth?state={}", state)
    }

    async fn exchange_code(&self, code: &str) -> Result<OAuthUser, OAuthProviderError> {
        self.exchanged.lock().unwrap().push(code.to_string());
        if self.fail_exchange {
            return Err(OAuthProviderError::ExchangeFailed(
                "provider said no".to_string(),
            ));
        }
        Ok(self.identity.clone())
    }
}

/// In-memory single-use store.
#[derive(Default)]
pub struct MockLoginStateStore {
    pub entries: Mutex<HashMap<String, PendingLogin>>,
    pub fail: bool,
}

#[async_trait]
impl LoginStateStore for MockLoginStateStore {
    async fn put(&self, session_id: &str, pending: PendingLogin) -> Result<(), LoginStateError> {
        if self.fail {
            return Err(LoginStateError::StoreError("boom".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(session_id.to_string(), pending);
        Ok(())
    }

    async fn take(&self, session_id: &str) -> Result<Option<PendingLogin>, LoginStateError> {
        if self.fail {
            return Err(LoginStateError::StoreError("boom".to_string()));
        }
        Ok(self.entries.lock().unwrap().remove(session_id))
    }
}
