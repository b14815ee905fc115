//! The notifier seam.

use std::sync::Mutex;

use async_trait::async_trait;

/// A single plain-text notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
    pub recipient: String,
}

/// Outcome of one notification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// No transport is configured; nothing was attempted.
    Disabled,
    /// The attempt was made and failed. The cause has been logged.
    Failed,
}

impl Delivery {
    pub fn delivered(self) -> bool {
        self == Delivery::Delivered
    }
}

/// Best-effort notification delivery.
///
/// Implementations must not panic or return errors; every failure is
/// folded into [`Delivery::Failed`].
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Delivery;
}

/// Keeps every notification in memory and reports a fixed outcome.
#[derive(Debug)]
pub struct RecordingNotifier {
    outcome: Delivery,
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// A notifier that reports every notification as delivered.
    pub fn new() -> Self {
        Self::with_outcome(Delivery::Delivered)
    }

    /// A notifier that records notifications but reports `outcome`.
    pub fn with_outcome(outcome: Delivery) -> Self {
        Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Everything passed to [`Notifier::notify`] so far.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> Delivery {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification.clone());
        }
        self.outcome
    }
}
