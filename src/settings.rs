//! Process configuration from environment (after `.env` is loaded by the binary).

use crate::error::SettingsError;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/customer_registry";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Create the database and tables on startup when missing.
    pub auto_migrate: bool,
    pub body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build settings from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), Some(5))?;
        let acquire_secs: u64 =
            parse_or("DB_ACQUIRE_TIMEOUT_SECS", lookup("DB_ACQUIRE_TIMEOUT_SECS"), Some(10))?;
        let auto_migrate = match lookup("AUTO_MIGRATE") {
            None => true,
            Some(v) => parse_bool(&v).ok_or(SettingsError::Invalid {
                var: "AUTO_MIGRATE",
                value: v,
            })?,
        };
        let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", lookup("BODY_LIMIT_BYTES"), Some(64 * 1024))?;
        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_secs),
            auto_migrate,
            body_limit_bytes,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: Option<T>,
) -> Result<T, SettingsError> {
    match raw {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| SettingsError::Invalid { var, value: v }),
        None => default.ok_or(SettingsError::Invalid {
            var,
            value: String::new(),
        }),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
