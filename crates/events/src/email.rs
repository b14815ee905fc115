//! Email notification delivery via SMTP.
//!
//! [`SmtpNotifier`] wraps the `lettre` async SMTP transport to send
//! plain-text notification emails. Configuration is read from environment
//! variables on every call; if `SMTP_HOST` is not set, delivery is skipped.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::notifier::{Delivery, Notification, Notifier};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Neither `FROM_EMAIL` nor `SMTP_USER` is set.
    #[error("No sender address configured")]
    MissingSender,

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default bound on connecting to and talking with the SMTP server.
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 10;

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address; falls back to the SMTP user.
    pub from_address: Option<String>,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
    /// Connection and command timeout.
    pub timeout: Duration,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable            | Required | Default       |
    /// |---------------------|----------|---------------|
    /// | `SMTP_HOST`         | yes      | --            |
    /// | `SMTP_PORT`         | no       | `587`         |
    /// | `SMTP_USER`         | no       | --            |
    /// | `SMTP_PASS`         | no       | --            |
    /// | `FROM_EMAIL`        | no       | `SMTP_USER`   |
    /// | `SMTP_TIMEOUT_SECS` | no       | `10`          |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let smtp_host = var("SMTP_HOST")?;
        let smtp_user = var("SMTP_USER");

        Some(Self {
            smtp_host,
            smtp_port: var("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: var("FROM_EMAIL").or_else(|| smtp_user.clone()),
            smtp_user,
            smtp_password: var("SMTP_PASS"),
            timeout: Duration::from_secs(
                var("SMTP_TIMEOUT_SECS")
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(DEFAULT_SMTP_TIMEOUT_SECS),
            ),
        })
    }
}

// ---------------------------------------------------------------------------
// SmtpNotifier
// ---------------------------------------------------------------------------

/// Variable lookup used to build an [`EmailConfig`] per call.
type VarLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Sends notification emails via SMTP with STARTTLS.
#[derive(Clone, Default)]
pub struct SmtpNotifier {
    /// `None` reads the process environment.
    lookup: Option<VarLookup>,
}

impl std::fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpNotifier")
            .field("env", &self.lookup.is_none())
            .finish()
    }
}

impl SmtpNotifier {
    /// A notifier configured from the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier configured through `lookup` instead of the environment.
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Some(Arc::new(lookup)),
        }
    }

    fn config(&self) -> Option<EmailConfig> {
        match &self.lookup {
            Some(lookup) => EmailConfig::from_lookup(|key| lookup(key)),
            None => EmailConfig::from_env(),
        }
    }

    /// Send one plain-text email with an explicit configuration.
    pub async fn send(config: &EmailConfig, notification: &Notification) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let from = config
            .from_address
            .as_deref()
            .ok_or(EmailError::MissingSender)?;

        let email = Message::builder()
            .from(from.parse()?)
            .to(notification.recipient.parse()?)
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port)
                .timeout(Some(config.timeout));

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, notification: &Notification) -> Delivery {
        let Some(config) = self.config() else {
            tracing::debug!("SMTP not configured; skipping email");
            return Delivery::Disabled;
        };

        match Self::send(&config, notification).await {
            Ok(()) => {
                tracing::info!(
                    to = %notification.recipient,
                    subject = %notification.subject,
                    "Notification email sent"
                );
                Delivery::Delivered
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    to = %notification.recipient,
                    host = %config.smtp_host,
                    "Email failed"
                );
                Delivery::Failed
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
