//! Configuration module for the team directory backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Maximum number of pooled database connections
    pub db_max_connections: u32,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

/// Raised when an environment variable holds a value that cannot be parsed.
#[derive(Debug)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {} value: {:?}", self.variable, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = lookup("TEAM_DB_PATH")
            .unwrap_or_else(|| "./data/team.sqlite".to_string())
            .into();

        let db_max_connections = parse_var(&lookup, "TEAM_DB_MAX_CONNECTIONS", "5")?;
        let bind_addr = parse_var(&lookup, "TEAM_BIND_ADDR", "127.0.0.1:8080")?;

        let log_level = lookup("TEAM_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_json = match lookup("TEAM_LOG_FORMAT").as_deref() {
            Some("json") => true,
            Some("text") | None => false,
            Some(other) => {
                return Err(ConfigError {
                    variable: "TEAM_LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            db_path,
            db_max_connections,
            bind_addr,
            log_level,
            log_json,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    variable: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(variable).unwrap_or_else(|| default.to_string());
    value.parse().map_err(|_| ConfigError { variable, value })
}
