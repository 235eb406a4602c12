use crate::config::{EmailConfig, SmtpConfig};
use crate::modules::email::application::ports::outgoing::EmailSender;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Thin seam over the SMTP transport so unit tests never open sockets.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_address: String,
}

impl SmtpEmailSender {
    pub fn with_mailer(mailer: Box<dyn Mailer>, from_address: &str) -> Self {
        Self {
            mailer,
            from_address: from_address.to_string(),
        }
    }

    /// Builds the transport matching the configured SMTP mode: an
    /// authenticated TLS relay, or a plain local relay (Mailpit etc.)
    /// for development.
    pub fn from_config(config: &EmailConfig) -> Result<Self, String> {
        let mailer: Box<dyn Mailer> = match &config.smtp {
            SmtpConfig::Relay {
                server,
                username,
                password,
            } => {
                let creds = Credentials::new(username.clone(), password.clone());
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(server)
                    .map_err(|e| format!("SMTP relay setup failed: {}", e))?
                    .credentials(creds)
                    .build();
                Box::new(transport)
            }
            SmtpConfig::Local { host, port } => {
                let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                    .port(*port)
                    .build();
                Box::new(transport)
            }
        };

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let email = Message::builder()
            .from(self.from_address.parse().map_err(|e| format!("{:?}", e))?)
            .to(to.parse().map_err(|e| format!("{:?}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await
    }
}
