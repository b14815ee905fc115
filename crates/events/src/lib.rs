//! Outbound notification delivery.
//!
//! - [`Notifier`]: the best-effort delivery seam injected into the HTTP
//!   layer. Delivery outcomes are reported, never raised.
//! - [`SmtpNotifier`]: plain-text email over STARTTLS, configured entirely
//!   from the environment at call time.
//! - [`RecordingNotifier`]: an in-memory notifier for tests and local runs.

pub mod email;
pub mod notifier;

pub use email::{EmailConfig, EmailError, SmtpNotifier};
pub use notifier::{Delivery, Notification, Notifier, RecordingNotifier};
