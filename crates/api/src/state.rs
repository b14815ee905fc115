use std::sync::Arc;

use folio_core::flash::FlashSigner;
use folio_events::Notifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Best-effort delivery of contact notifications.
    pub notifier: Arc<dyn Notifier>,
    /// Signs and verifies flash cookies.
    pub flash: Arc<FlashSigner>,
}

impl AppState {
    /// Assemble state, deriving the flash signer from the configured secret.
    pub fn new(pool: folio_db::DbPool, config: ServerConfig, notifier: Arc<dyn Notifier>) -> Self {
        let flash = Arc::new(FlashSigner::new(&config.secret_key));
        Self {
            pool,
            config: Arc::new(config),
            notifier,
            flash,
        }
    }
}
