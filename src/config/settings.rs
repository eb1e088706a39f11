//! Process settings loaded from environment variables (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite3?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQL dialect behind a connection URL. Only DDL differs between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
}

impl DatabaseBackend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(DatabaseBackend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(DatabaseBackend::Sqlite)
        } else {
            Err(ConfigError::UnsupportedDatabase(url.to_string()))
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub db_url: String,
    /// Log every SQL statement the pool executes.
    pub db_echo: bool,
    pub db_max_connections: u32,
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        DatabaseBackend::from_url(&db_url)?;

        let db_echo = match lookup("DB_ECHO") {
            Some(v) => parse_bool("DB_ECHO", &v)?,
            None => false,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => {
                let n: u32 = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "DB_MAX_CONNECTIONS",
                    message: format!("'{}' is not a positive integer", v),
                })?;
                if n == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "DB_MAX_CONNECTIONS",
                        message: "must be at least 1".into(),
                    });
                }
                n
            }
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            message: format!("'{}' is not a socket address", bind_raw),
        })?;

        Ok(Settings {
            db_url,
            db_echo,
            db_max_connections,
            bind_addr,
        })
    }

    pub fn backend(&self) -> Result<DatabaseBackend, ConfigError> {
        DatabaseBackend::from_url(&self.db_url)
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            message: format!("'{}' is not a boolean", raw),
        }),
    }
}
