//! Outbound Mail (SMTP)
//!
//! Single-operation mail delivery: `send(to, subject, body)` over an SMTP
//! relay. The transport is built once at process start and injected into
//! the application layers; callers decide what a delivery failure means
//! (everywhere in this workspace: log and continue).

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

/// SMTP transport configuration
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Relay host, e.g. `smtp.example.com`
    pub host: String,
    /// 465 uses implicit TLS, anything else negotiates STARTTLS
    pub port: u16,
    /// Relay account name
    pub username: String,
    /// Relay account password (app password, not a primary credential)
    pub password: String,
    /// Sender address, `Name <addr@host>` or bare `addr@host`
    pub from: String,
}

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// Sender or recipient address failed to parse
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message assembly failed
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP conversation failed
    #[error("SMTP transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Best-effort outbound message delivery
#[trait_variant::make(Notifier: Send)]
pub trait LocalNotifier {
    /// Deliver a plain-text message. One attempt, no retries.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError>;
}

/// SMTP-backed notifier
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build the long-lived transport from config.
    pub fn from_config(config: &MailerConfig) -> Result<Self, MailerError> {
        let from: Mailbox = config.from.parse()?;

        let builder = if config.port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }
}

impl Notifier for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(message).await?;

        Ok(())
    }
}
