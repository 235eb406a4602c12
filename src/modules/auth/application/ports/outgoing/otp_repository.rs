use crate::modules::auth::application::domain::entities::PasswordOtp;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OtpRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Deletes any outstanding OTP for the email and stores the new one,
    /// keeping the at-most-one-live-OTP-per-email invariant.
    async fn replace(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), OtpRepositoryError>;

    async fn find(&self, email: &str, code: &str)
        -> Result<Option<PasswordOtp>, OtpRepositoryError>;

    /// Single use: the row is removed on successful verification (and on
    /// expired-code rejection).
    async fn delete(&self, id: i64) -> Result<(), OtpRepositoryError>;
}
