//! Environment-driven configuration.
//!
//! Everything is loaded once in `main` before the listener binds. A missing
//! mandatory value is a startup failure, never a per-request error: the
//! service refuses to start rather than accept telemetry it cannot persist.

use std::time::Duration;

use beacon_db::{ConnectionSpec, StoreConfig};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Build store configuration from the environment.
///
/// `DATABASE_URL` wins when set. Otherwise the discrete parameters are used
/// and `DB_HOST`, `DB_NAME`, `DB_USER`, and `DB_PASSWORD` become mandatory;
/// `DB_PORT` defaults to `5432` and `DB_SSLMODE` is optional.
///
/// # Panics
///
/// On missing mandatory values or unparsable numerics.
pub fn store_config_from_env() -> StoreConfig {
    let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
        .unwrap_or_else(|_| "20".into())
        .parse()
        .expect("DB_MAX_CONNECTIONS must be a valid u32");

    let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
        .unwrap_or_else(|_| "5".into())
        .parse()
        .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

    let connection = match std::env::var("DATABASE_URL") {
        Ok(url) => ConnectionSpec::Url(url),
        Err(_) => {
            let port: u16 = std::env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".into())
                .parse()
                .expect("DB_PORT must be a valid u16");

            ConnectionSpec::Params {
                host: require("DB_HOST"),
                port,
                database: require("DB_NAME"),
                username: require("DB_USER"),
                password: require("DB_PASSWORD"),
                ssl_mode: std::env::var("DB_SSLMODE").ok(),
            }
        }
    };

    StoreConfig {
        connection,
        max_connections,
        acquire_timeout: Duration::from_secs(acquire_timeout_secs),
    }
}

fn require(key: &str) -> String {
    std::env::var(key)
        .unwrap_or_else(|_| panic!("{key} must be set (or provide DATABASE_URL instead)"))
}
