use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::modules::auth::application::domain::entities::{NewUser, Role, User, UserPublic};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};
use crate::modules::sso::application::ports::outgoing::{
    LoginStateError, LoginStateStore, OAuthProvider, OAuthProviderError, OAuthUser, PendingLogin,
};

const PROVIDER: &str = "google";
const USERNAME_SUFFIX_LEN: usize = 6;
const PROVISION_ATTEMPTS: usize = 5;

#[derive(Debug, Error)]
pub enum SsoError {
    #[error("Path not found")]
    UnknownRole,
    #[error("Authorization Code not received from SSO.")]
    MissingCode,
    #[error("State Mismatch. Time expired?")]
    StateMismatch,
    #[error("SSO token exchange failed.")]
    ExchangeFailed(String),
    #[error("User signed up with {0}. Please sign in with {0}.")]
    WrongProvider(String),
    #[error("SSO error: {0}")]
    StoreError(String),
}

impl From<LoginStateError> for SsoError {
    fn from(e: LoginStateError) -> Self {
        SsoError::StoreError(e.to_string())
    }
}

impl From<OAuthProviderError> for SsoError {
    fn from(e: OAuthProviderError) -> Self {
        SsoError::ExchangeFailed(e.to_string())
    }
}

/// What the start leg hands the HTTP layer: where to send the browser
/// and the session id to park in a cookie.
#[derive(Debug, Clone)]
pub struct StartedLogin {
    pub session_id: String,
    pub redirect_url: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SsoLoginResponse {
    pub user: UserPublic,
    pub access: String,
    pub refresh: String,
}

#[async_trait]
pub trait ISsoUseCase {
    /// Parks `{state, role}` under a fresh session id and builds the
    /// provider redirect.
    async fn start(&self, role: &str) -> Result<StartedLogin, SsoError>;

    /// Completes the flow: state check, code exchange, then sign-in or
    /// one-transaction provisioning.
    async fn callback(
        &self,
        session_id: Option<String>,
        code: Option<String>,
        state: Option<String>,
    ) -> Result<SsoLoginResponse, SsoError>;
}

pub struct SsoUseCase<O, L, Q, R, H, T>
where
    O: OAuthProvider,
    L: LoginStateStore,
    Q: UserQuery,
    R: UserRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    provider: O,
    login_states: L,
    users: Q,
    repository: R,
    hasher: H,
    tokens: T,
}

fn opaque_token(len: usize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `ada.lovelace@gmail.com` -> `ada.lovelace-x7Qp2f`. The random
/// suffix keeps candidates apart when two accounts share a local part.
fn candidate_username(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let local: String = local
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+' | '@'))
        .collect();
    format!("{}-{}", local, opaque_token(USERNAME_SUFFIX_LEN))
}

impl<O, L, Q, R, H, T> SsoUseCase<O, L, Q, R, H, T>
where
    O: OAuthProvider,
    L: LoginStateStore,
    Q: UserQuery,
    R: UserRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    pub fn new(provider: O, login_states: L, users: Q, repository: R, hasher: H, tokens: T) -> Self {
        Self {
            provider,
            login_states,
            users,
            repository,
            hasher,
            tokens,
        }
    }

    fn login_response(&self, user: &User) -> Result<SsoLoginResponse, SsoError> {
        let pair = self
            .tokens
            .issue_pair(user)
            .map_err(|e| SsoError::StoreError(e.to_string()))?;
        Ok(SsoLoginResponse {
            user: UserPublic::from(user),
            access: pair.access,
            refresh: pair.refresh,
        })
    }

    /// Nobody ever logs in with this password; SSO accounts
    /// authenticate through the provider.
    async fn unusable_password_hash(&self) -> Result<String, SsoError> {
        self.hasher
            .hash_password(&opaque_token(32))
            .await
            .map_err(|e| SsoError::StoreError(e.to_string()))
    }

    async fn provision(&self, role: Role, identity: &OAuthUser) -> Result<User, SsoError> {
        let password_hash = self.unusable_password_hash().await?;

        // A taken candidate gets a fresh suffix and another try.
        for _ in 0..PROVISION_ATTEMPTS {
            let new_user = NewUser {
                username: candidate_username(&identity.email),
                email: identity.email.clone(),
                password_hash: password_hash.clone(),
                role,
                provider: PROVIDER.to_string(),
                provider_user_id: Some(identity.id.clone()),
            };

            match self.repository.create_with_profile(new_user).await {
                Ok(user) => return Ok(user),
                Err(UserRepositoryError::UsernameTaken) => continue,
                Err(e) => return Err(SsoError::StoreError(e.to_string())),
            }
        }

        Err(SsoError::StoreError(
            "Could not find a free username".to_string(),
        ))
    }
}

#[async_trait]
impl<O, L, Q, R, H, T> ISsoUseCase for SsoUseCase<O, L, Q, R, H, T>
where
    O: OAuthProvider,
    L: LoginStateStore,
    Q: UserQuery,
    R: UserRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    async fn start(&self, role: &str) -> Result<StartedLogin, SsoError> {
        let role = Role::parse(role).ok_or(SsoError::UnknownRole)?;

        let session_id = opaque_token(32);
        let state = opaque_token(32);
        self.login_states
            .put(
                &session_id,
                PendingLogin {
                    state: state.clone(),
                    role,
                },
            )
            .await?;

        Ok(StartedLogin {
            redirect_url: self.provider.authorization_url(&state),
            session_id,
        })
    }

    async fn callback(
        &self,
        session_id: Option<String>,
        code: Option<String>,
        state: Option<String>,
    ) -> Result<SsoLoginResponse, SsoError> {
        // The store entry is consumed here, so a replayed callback
        // fails the state check even with a valid-looking state.
        let pending = match session_id {
            Some(id) => self.login_states.take(&id).await?,
            None => None,
        }
        .ok_or(SsoError::StateMismatch)?;

        let code = code.ok_or(SsoError::MissingCode)?;
        if state.as_deref() != Some(pending.state.as_str()) {
            return Err(SsoError::StateMismatch);
        }

        let identity = self.provider.exchange_code(&code).await?;

        let existing = self
            .users
            .find_by_email(&identity.email)
            .await
            .map_err(|e| SsoError::StoreError(e.to_string()))?;

        let user = match existing {
            Some(user) => {
                let provider = self
                    .users
                    .signup_provider(&user)
                    .await
                    .map_err(|e| SsoError::StoreError(e.to_string()))?
                    .unwrap_or_else(|| "password".to_string());
                if provider != PROVIDER {
                    return Err(SsoError::WrongProvider(provider));
                }
                user
            }
            None => self.provision(pending.role, &identity).await?,
        };

        self.login_response(&user)
    }
}
