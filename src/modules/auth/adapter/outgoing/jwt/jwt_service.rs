use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::modules::auth::application::domain::entities::{Role, TokenPair, User};
use crate::modules::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn access_lifetime(&self) -> Duration {
        Duration::hours(self.config.access_token_lifetime_hours)
    }

    fn refresh_lifetime(&self) -> Duration {
        Duration::days(self.config.refresh_token_lifetime_days)
    }

    fn generate(
        &self,
        user_uuid: Uuid,
        role: Role,
        token_type: &str,
        lifetime: Duration,
    ) -> Result<(String, DateTime<Utc>), TokenError> {
        let now = Utc::now();
        let expiration = now + lifetime;

        let claims = TokenClaims {
            sub: user_uuid,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            token_type: token_type.to_string(),
            role: role.as_str().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok((token, expiration))
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_pair(&self, user: &User) -> Result<TokenPair, TokenError> {
        let (access, access_expiration) =
            self.generate(user.uuid, user.role, "access", self.access_lifetime())?;
        let (refresh, refresh_expiration) =
            self.generate(user.uuid, user.role, "refresh", self.refresh_lifetime())?;

        Ok(TokenPair {
            access,
            refresh,
            access_expiration,
            refresh_expiration,
        })
    }

    fn issue_access(
        &self,
        user_uuid: Uuid,
        role: Role,
    ) -> Result<(String, DateTime<Utc>), TokenError> {
        self.generate(user_uuid, role, "access", self.access_lifetime())
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(
            |e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken
                    | ErrorKind::InvalidAlgorithm
                    | ErrorKind::Base64(_)
                    | ErrorKind::Json(_)
                    | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: unknown error");
                        TokenError::MalformedToken
                    }
                }
            },
        )?;

        Ok(decoded.claims)
    }
}
