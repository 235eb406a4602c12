use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{OtpRepository, UserQuery};
use crate::modules::email::application::services::OtpMailer;

const OTP_TTL_MINUTES: i64 = 30;

// ====================== Request OTP Request ======================
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct RequestOtpRequest {
    #[serde(default)]
    pub email: Option<String>,
}

// ====================== Request OTP Error ======================
#[derive(Debug, PartialEq)]
pub enum RequestOtpError {
    MissingEmail,
    UnknownEmail,
    SendFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RequestOtpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestOtpError::MissingEmail => write!(f, "Email is required"),
            RequestOtpError::UnknownEmail => write!(f, "User with this email does not exist"),
            RequestOtpError::SendFailed(msg) => write!(f, "OTP email failed: {}", msg),
            RequestOtpError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RequestOtpError {}

// ====================== Request OTP Response ======================
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RequestOtpResponse {
    /// The uuid of the user the code was mailed to; the verify endpoint
    /// wants it back in the path.
    pub uuid: Uuid,
}

// ====================== Request OTP Use Case ======================
#[async_trait]
pub trait IRequestPasswordOtpUseCase: Send + Sync {
    async fn execute(&self, request: RequestOtpRequest)
        -> Result<RequestOtpResponse, RequestOtpError>;
}

pub struct RequestPasswordOtpUseCase<Q, O>
where
    Q: UserQuery,
    O: OtpRepository,
{
    query: Q,
    otps: O,
    mailer: OtpMailer,
}

impl<Q, O> RequestPasswordOtpUseCase<Q, O>
where
    Q: UserQuery,
    O: OtpRepository,
{
    pub fn new(query: Q, otps: O, mailer: OtpMailer) -> Self {
        Self { query, otps, mailer }
    }
}

/// Zero-padded 6-digit code from the OS entropy source.
fn generate_code() -> String {
    let n: u32 = OsRng.gen_range(0..1_000_000);
    format!("{:06}", n)
}

#[async_trait]
impl<Q, O> IRequestPasswordOtpUseCase for RequestPasswordOtpUseCase<Q, O>
where
    Q: UserQuery,
    O: OtpRepository,
{
    async fn execute(
        &self,
        request: RequestOtpRequest,
    ) -> Result<RequestOtpResponse, RequestOtpError> {
        let email = match request.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => email.to_lowercase(),
            _ => return Err(RequestOtpError::MissingEmail),
        };

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| RequestOtpError::RepositoryError(e.to_string()))?
            .ok_or(RequestOtpError::UnknownEmail)?;

        let code = generate_code();
        let expires_at = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);

        // Supersedes any outstanding code for this email.
        self.otps
            .replace(&user.email, &code, expires_at)
            .await
            .map_err(|e| RequestOtpError::RepositoryError(e.to_string()))?;

        if let Err(e) = self.mailer.send_password_otp(&user.email, &code).await {
            // Nobody ever received this code; an undelivered OTP must
            // not stay verifiable.
            if let Ok(Some(otp)) = self.otps.find(&user.email, &code).await {
                if let Err(del) = self.otps.delete(otp.id).await {
                    warn!("Undelivered OTP for {} not removed: {}", user.email, del);
                }
            }
            return Err(RequestOtpError::SendFailed(e));
        }

        Ok(RequestOtpResponse { uuid: user.uuid })
    }
}
