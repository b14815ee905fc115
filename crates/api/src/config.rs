use std::path::{Path, PathBuf};

/// Signing key used when neither `SECRET_KEY` nor `FLASK_SECRET` is set.
/// Only fit for local runs.
pub const DEFAULT_SECRET_KEY: &str = "dev-only-local-fallback-set-SECRET_KEY-in-prod";

/// Database file used when the deployment is ephemeral (`RENDER` is set).
const EPHEMERAL_DB_PATH: &str = "/tmp/site.db";

/// Database file name inside the data directory.
const DB_FILE_NAME: &str = "site.db";

/// Where the relational store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// Explicit connection URL from `DATABASE_URL`.
    Url(String),
    /// Scratch file that does not survive a redeploy.
    Ephemeral(PathBuf),
    /// File under the data directory, kept across restarts.
    Persistent(PathBuf),
}

impl DatabaseLocation {
    /// Connection URL for this location.
    pub fn url(&self) -> String {
        match self {
            DatabaseLocation::Url(url) => url.clone(),
            DatabaseLocation::Ephemeral(path) | DatabaseLocation::Persistent(path) => {
                folio_db::file_url(path)
            }
        }
    }

    /// Create the data directory of a persistent location if it is missing.
    pub fn prepare(&self) -> std::io::Result<()> {
        if let DatabaseLocation::Persistent(path) = self {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Key for signing flash cookies.
    pub secret_key: String,
    /// Relational store location.
    pub database: DatabaseLocation,
    /// Recipient of contact notifications; `None` skips notifying.
    pub admin_email: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `5000`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5000`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `SECRET_KEY`           | `FLASK_SECRET`, else dev key     |
    /// | `DATABASE_URL`         | derived from `RENDER`/`DATA_DIR` |
    /// | `RENDER`               | unset: persistent store          |
    /// | `DATA_DIR`             | `data`                           |
    /// | `ADMIN_EMAIL`          | `FROM_EMAIL`                     |
    ///
    /// # Panics
    ///
    /// Panics if `PORT` or `REQUEST_TIMEOUT_SECS` is not a valid number.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = var("PORT")
            .unwrap_or_else(|| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let secret_key = var("SECRET_KEY")
            .or_else(|| var("FLASK_SECRET"))
            .unwrap_or_else(|| DEFAULT_SECRET_KEY.into());

        let database = match (var("DATABASE_URL"), var("RENDER")) {
            (Some(url), _) => DatabaseLocation::Url(url),
            (None, Some(_)) => DatabaseLocation::Ephemeral(PathBuf::from(EPHEMERAL_DB_PATH)),
            (None, None) => {
                let data_dir = var("DATA_DIR").unwrap_or_else(|| "data".into());
                DatabaseLocation::Persistent(Path::new(&data_dir).join(DB_FILE_NAME))
            }
        };

        let admin_email = var("ADMIN_EMAIL").or_else(|| var("FROM_EMAIL"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            secret_key,
            database,
            admin_email,
        }
    }

    /// Whether flash cookies are signed with the built-in fallback key.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
