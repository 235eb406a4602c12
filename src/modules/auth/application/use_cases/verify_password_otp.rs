use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserPublic;
use crate::modules::auth::application::ports::outgoing::{
    OtpRepository, TokenProvider, UserQuery,
};
use crate::modules::auth::application::use_cases::login_user::LoginUserResponse;

// ====================== Verify OTP Request ======================
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub otp: Option<String>,
}

// ====================== Verify OTP Error ======================
#[derive(Debug, PartialEq)]
pub enum VerifyOtpError {
    MissingFields,
    UserNotFound,
    InvalidOtp,
    /// The code matched but its window has closed. The row is gone
    /// either way.
    OtpExpired,
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for VerifyOtpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyOtpError::MissingFields => write!(f, "OTP and UUID are required"),
            VerifyOtpError::UserNotFound => write!(f, "User not found"),
            VerifyOtpError::InvalidOtp => write!(f, "Invalid OTP"),
            VerifyOtpError::OtpExpired => write!(f, "OTP has expired"),
            VerifyOtpError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            VerifyOtpError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for VerifyOtpError {}

// ====================== Verify OTP Use Case ======================
#[async_trait]
pub trait IVerifyPasswordOtpUseCase: Send + Sync {
    /// A passing code logs the user straight in.
    async fn execute(
        &self,
        user_uuid: Uuid,
        request: VerifyOtpRequest,
    ) -> Result<LoginUserResponse, VerifyOtpError>;
}

pub struct VerifyPasswordOtpUseCase<Q, O, T>
where
    Q: UserQuery,
    O: OtpRepository,
    T: TokenProvider,
{
    query: Q,
    otps: O,
    tokens: T,
}

impl<Q, O, T> VerifyPasswordOtpUseCase<Q, O, T>
where
    Q: UserQuery,
    O: OtpRepository,
    T: TokenProvider,
{
    pub fn new(query: Q, otps: O, tokens: T) -> Self {
        Self { query, otps, tokens }
    }
}

#[async_trait]
impl<Q, O, T> IVerifyPasswordOtpUseCase for VerifyPasswordOtpUseCase<Q, O, T>
where
    Q: UserQuery,
    O: OtpRepository,
    T: TokenProvider,
{
    async fn execute(
        &self,
        user_uuid: Uuid,
        request: VerifyOtpRequest,
    ) -> Result<LoginUserResponse, VerifyOtpError> {
        let code = match request.otp.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => return Err(VerifyOtpError::MissingFields),
        };

        let user = self
            .query
            .find_by_uuid(user_uuid)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?
            .ok_or(VerifyOtpError::UserNotFound)?;

        let otp = self
            .otps
            .find(&user.email, &code)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?
            .ok_or(VerifyOtpError::InvalidOtp)?;

        // Single use in both directions: expired rows die here too.
        if otp.is_expired(Utc::now()) {
            self.otps
                .delete(otp.id)
                .await
                .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?;
            return Err(VerifyOtpError::OtpExpired);
        }

        self.otps
            .delete(otp.id)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?;

        let pair = self
            .tokens
            .issue_pair(&user)
            .map_err(|e| VerifyOtpError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            user: UserPublic::from(&user),
            access: pair.access,
            refresh: pair.refresh,
            access_expiration: pair.access_expiration,
            refresh_expiration: pair.refresh_expiration,
        })
    }
}
