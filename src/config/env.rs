//! `ServerConfig` and its environment variables.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/books";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
    /// Skip schema setup at startup (schema managed elsewhere).
    pub skip_migrations: bool,
}

impl ServerConfig {
    /// Read from process environment: DATABASE_URL, BIND_ADDR, DB_MAX_CONNECTIONS,
    /// BODY_LIMIT_BYTES, SKIP_MIGRATIONS.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), Some(DEFAULT_MAX_CONNECTIONS))?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                message: "must be at least 1".into(),
            });
        }
        let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), Some(DEFAULT_BODY_LIMIT_BYTES))?;
        let skip_migrations = match get("SKIP_MIGRATIONS").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("0") | Some("false") | Some("no") => false,
            Some("1") | Some("true") | Some("yes") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "SKIP_MIGRATIONS",
                    message: format!("expected true or false, got '{}'", other),
                })
            }
        };

        Ok(ServerConfig {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes,
            skip_migrations,
        })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(s) => s.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            message: e.to_string(),
        }),
        None => default.ok_or_else(|| ConfigError::Invalid {
            var,
            message: "no default".into(),
        }),
    }
}
