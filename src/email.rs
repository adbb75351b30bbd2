//! Email delivery for contact submissions, built on lettre

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use saema_contact::{MailError, MailPayload, Mailer};
use tracing::info;

use crate::config::EmailConfig;

/// SMTP-backed mail service standing behind the mail-sending boundary.
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
    contact_address: String,
    skip_sending: bool,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_email,
                "Email service initialized with authentication and STARTTLS"
            );
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: format!("{} <{}>", config.from_name, config.from_email),
            contact_address: config.contact_address.clone(),
            skip_sending: false,
        })
    }

    /// Create a mock email service for testing (skips actual SMTP)
    pub fn new_mock(config: &EmailConfig) -> Self {
        let mailer = SmtpTransport::builder_dangerous("localhost")
            .port(1025)
            .build();

        Self {
            mailer,
            from: format!("{} <{}>", config.from_name, config.from_email),
            contact_address: config.contact_address.clone(),
            skip_sending: true,
        }
    }

    /// Whether the SMTP transport currently accepts connections.
    pub fn is_ready(&self) -> bool {
        if self.skip_sending {
            return true;
        }
        self.mailer.test_connection().unwrap_or(false)
    }

    /// Send a plain-text email to the configured contact inbox.
    pub fn send_plain(&self, subject: &str, body: String) -> Result<(), MailError> {
        if self.skip_sending {
            info!("Mock email service: skipping SMTP send");
            return Ok(());
        }

        let from: Mailbox = self
            .from
            .parse()
            .map_err(|err| MailError::Transport(format!("invalid from address: {err}")))?;
        let to: Mailbox = self
            .contact_address
            .parse()
            .map_err(|err| MailError::Transport(format!("invalid contact address: {err}")))?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|err| MailError::Transport(err.to_string()))?;

        match self.mailer.send(&email) {
            Ok(_) => {
                info!(to = %self.contact_address, "Contact notification sent");
                Ok(())
            }
            // A response code means the server answered and said no; anything
            // else never made it past the wire.
            Err(err) => match err.status() {
                Some(code) => Err(MailError::Rejected(format!("{code}: {err}"))),
                None => Err(MailError::Transport(err.to_string())),
            },
        }
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, payload: &MailPayload) -> Result<(), MailError> {
        self.send_plain(
            "New message from contact page",
            format!(
                "Email: {}\nName: {}\nMessage: {}\n",
                payload.email, payload.name, payload.message
            ),
        )
    }
}
