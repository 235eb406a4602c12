use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::GoogleOAuthConfig;
use crate::modules::sso::application::ports::outgoing::{
    OAuthProvider, OAuthProviderError, OAuthUser,
};

const USERINFO_URI: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Outbound calls run inline with the request, so both legs carry an
/// explicit timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserinfoResponse {
    id: String,
    email: String,
}

#[derive(Clone)]
pub struct GoogleOAuthProvider {
    config: GoogleOAuthConfig,
    http: reqwest::Client,
}

impl GoogleOAuthProvider {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthProvider {
    fn authorization_url(&self, state: &str) -> String {
        // access_type=offline + prompt=consent so Google re-issues a
        // refresh token on every consent.
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", "openid email profile"),
            ("access_type", "offline"),
            ("prompt", "consent"),
            ("state", state),
        ];

        match reqwest::Url::parse_with_params(&self.config.auth_uri, params) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::error!("Malformed auth_uri in OAuth config: {}", e);
                self.config.auth_uri.clone()
            }
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<OAuthUser, OAuthProviderError> {
        let form = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.config.token_uri)
            .timeout(REQUEST_TIMEOUT)
            .form(&form)
            .send()
            .await
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OAuthProviderError::ExchangeFailed(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?;

        let response = self
            .http
            .get(USERINFO_URI)
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| OAuthProviderError::UserinfoFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OAuthProviderError::UserinfoFailed(format!(
                "userinfo endpoint returned {}",
                response.status()
            )));
        }

        let info: UserinfoResponse = response
            .json()
            .await
            .map_err(|e| OAuthProviderError::UserinfoFailed(e.to_string()))?;

        Ok(OAuthUser {
            id: info.id,
            email: info.email.to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GoogleOAuthConfig {
        GoogleOAuthConfig {
            client_id: "abc.apps.googleusercontent.com".to_string(),
            client_secret: "shhh".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            redirect_uri: "https://api.example.com/sso/google/callback".to_string(),
        }
    }

    #[test]
    fn authorization_url_carries_the_full_consent_parameters() {
        let provider = GoogleOAuthProvider::new(config());
        let url = provider.authorization_url("opaque-state");

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(url.contains("client_id=abc.apps.googleusercontent.com"));
        assert!(url.contains("access_type=offline"));
        assert!(url.contains("prompt=consent"));
        assert!(url.contains("state=opaque-state"));
        assert!(url.contains("response_type=code"));
    }

    #[test]
    fn the_redirect_uri_is_url_encoded() {
        let provider = GoogleOAuthProvider::new(config());
        let url = provider.authorization_url("s");

        assert!(url.contains("redirect_uri=https%3A%2F%2Fapi.example.com%2Fsso%2Fgoogle%2Fcallback"));
    }
}
