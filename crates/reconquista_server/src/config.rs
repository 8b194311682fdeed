//! Server configuration from environment variables.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file loaded by `main` before this module runs.

use reconquista_core::default_log_level;
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_PATH: &str = "reconquista.db";

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(value) => write!(f, "PORT must be a number, got `{value}`"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl ServerConfig {
    /// Reads configuration from the environment, falling back to local
    /// development defaults.
    ///
    /// Recognized variables: `HOST`, `PORT`, `DATABASE_PATH`, `LOG_LEVEL`,
    /// `LOG_DIR` (unset means stderr logging).
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH));
        let log_level =
            env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
        let log_dir = env::var("LOG_DIR").ok();

        Ok(Self {
            host,
            port,
            database_path,
            log_level,
            log_dir,
        })
    }

    /// Socket address string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            database_path: "x.db".into(),
            log_level: "info".to_string(),
            log_dir: None,
        };
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }
}
