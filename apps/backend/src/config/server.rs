use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HEARTBEAT_SECS: u64 = 20;
const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 40;

/// Runtime settings for the HTTP/websocket server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// How often a session pings its client.
    pub heartbeat_interval: Duration,
    /// Silence after which a session is closed.
    pub client_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            heartbeat_interval: Duration::from_secs(DEFAULT_HEARTBEAT_SECS),
            client_timeout: Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Read `DURAK_HOST`, `DURAK_PORT`, `DURAK_HEARTBEAT_SECS` and
    /// `DURAK_CLIENT_TIMEOUT_SECS`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DURAK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        if host.trim().is_empty() {
            return Err(AppError::config("DURAK_HOST must not be empty"));
        }

        let port = parse_var(&lookup, "DURAK_PORT", DEFAULT_PORT)?;
        let heartbeat = parse_var(&lookup, "DURAK_HEARTBEAT_SECS", DEFAULT_HEARTBEAT_SECS)?;
        let timeout = parse_var(
            &lookup,
            "DURAK_CLIENT_TIMEOUT_SECS",
            DEFAULT_CLIENT_TIMEOUT_SECS,
        )?;

        if heartbeat == 0 {
            return Err(AppError::config("DURAK_HEARTBEAT_SECS must be positive"));
        }
        if timeout <= heartbeat {
            return Err(AppError::config(format!(
                "DURAK_CLIENT_TIMEOUT_SECS ({timeout}) must exceed DURAK_HEARTBEAT_SECS ({heartbeat})"
            )));
        }

        Ok(Self {
            host,
            port,
            heartbeat_interval: Duration::from_secs(heartbeat),
            client_timeout: Duration::from_secs(timeout),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{key} has invalid value '{raw}'"))),
    }
}
