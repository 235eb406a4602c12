use std::sync::Arc;

use uuid::Uuid;

use crate::config::JwtConfig;
use crate::modules::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::TokenProvider;

/// Real JWT service with a fixed test secret, shaped the way handlers
/// expect it in app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: "a-test-secret-key-of-sufficient-length".to_string(),
        access_token_lifetime_hours: 5,
        refresh_token_lifetime_days: 7,
    }))
}

/// Issues an access token for a fresh user uuid with the given role.
pub fn access_token(provider: &Arc<dyn TokenProvider + Send + Sync>, role: Role) -> (Uuid, String) {
    let uuid = Uuid::new_v4();
    let (token, _) = provider
        .issue_access(uuid, role)
        .expect("test token issuance failed");
    (uuid, token)
}
