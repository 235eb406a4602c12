use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OAuthProviderError {
    #[error("Token exchange failed: {0}")]
    ExchangeFailed(String),
    #[error("Userinfo fetch failed: {0}")]
    UserinfoFailed(String),
}

/// The identity the provider vouches for after a successful exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthUser {
    /// Provider-side stable user id.
    pub id: String,
    pub email: String,
}

#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// The URL the browser is redirected to, carrying `state` for the
    /// round trip.
    fn authorization_url(&self, state: &str) -> String;

    /// Redeems the authorization code and resolves the user behind it.
    async fn exchange_code(&self, code: &str) -> Result<OAuthUser, OAuthProviderError>;
}
