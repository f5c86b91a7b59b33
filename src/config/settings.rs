//! Runtime settings read from the environment (`.env` is loaded by the binary via dotenvy).

use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://memodb.sqlite";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://127.0.0.1:5500";
pub const DEFAULT_LOG_FILTER: &str = "memo_api=debug,memo_server=debug,tower_http=info";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct LogSettings {
    /// EnvFilter directives, e.g. `memo_api=debug`.
    pub filter: String,
    /// Also write logs to this file when set.
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub bind_address: SocketAddr,
    /// The single origin allowed to make credentialed cross-origin requests.
    pub cors_origin: HeaderValue,
    pub log: LogSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        if !url.starts_with("sqlite:") {
            return Err(ConfigError::Invalid {
                key: "DATABASE_URL",
                value: url,
                reason: "expected a sqlite: URL".into(),
            });
        }

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                        reason: "expected a positive integer".into(),
                    })
                }
            },
            None if is_in_memory(&url) => 1,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if is_in_memory(&url) && max_connections > 1 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: max_connections.to_string(),
                reason: "an in-memory database is private to one connection; use 1".into(),
            });
        }

        let bind_raw = get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());
        let bind_address = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "BIND_ADDRESS",
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let origin_raw = get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into());
        if origin_raw == "*" {
            return Err(ConfigError::Invalid {
                key: "CORS_ORIGIN",
                value: origin_raw,
                reason: "wildcard origin cannot be combined with credentials".into(),
            });
        }
        let cors_origin = HeaderValue::from_str(&origin_raw).map_err(|e| ConfigError::Invalid {
            key: "CORS_ORIGIN",
            value: origin_raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Settings {
            database: DatabaseSettings { url, max_connections },
            bind_address,
            cors_origin,
            log: LogSettings {
                filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
                file: get("LOG_FILE").map(PathBuf::from),
            },
        })
    }
}

/// `sqlite::memory:` and `mode=memory` URLs give every connection its own empty database.
pub fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
