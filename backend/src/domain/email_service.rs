use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use crate::config::SmtpConfig;

/// A fully composed notification ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

/// Delivery backend for booking notifications
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<()>;
}

pub struct SmtpMailer {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        info!("📧 Initializing email service for SMTP server: {}:{}", config.host, config.port);

        let from = config
            .username
            .parse::<Mailbox>()
            .context("EMAIL_USER is not a valid sender address")?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .context("Failed to create SMTP relay")?
            .port(config.port)
            .credentials(Credentials::new(config.username.clone(), config.password.clone()))
            .build();

        Ok(Self { from, transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<()> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse::<Mailbox>().context("Failed to parse recipient address")?)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = email.reply_to {
            match reply_to.parse::<Mailbox>() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => warn!("📧 Skipping Reply-To '{}': {}", reply_to, e),
            }
        }

        let message = builder.body(email.html_body).context("Failed to build email")?;

        self.transport
            .send(message)
            .await
            .context("SMTP delivery failed")?;

        info!("📧 Notification sent to {}", email.to);
        Ok(())
    }
}

/// Used when no SMTP credentials are configured; every send fails
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<()> {
        warn!("📧 Dropping notification to {}: email delivery is not configured", email.to);
        Err(anyhow!("email delivery is not configured"))
    }
}
