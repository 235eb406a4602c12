use crate::modules::email::application::ports::outgoing::EmailSender;
use std::fmt;
use std::sync::Arc;

const OTP_SUBJECT: &str = "Your password reset code";

/// Composes and sends the password-reset OTP mail.
#[derive(Clone)]
pub struct OtpMailer {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for OtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpMailer")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl OtpMailer {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    pub async fn send_password_otp(&self, to: &str, code: &str) -> Result<(), String> {
        let body = format!(
            "<p>Use this one-time code to reset your password:</p>\
             <h2>{}</h2>\
             <p>The code expires in 30 minutes. If you did not request a reset, \
             you can ignore this email.</p>",
            code
        );
        self.sender.send_email(to, OTP_SUBJECT, &body).await
    }
}
