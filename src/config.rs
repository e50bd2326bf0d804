//! Runtime configuration: defaults, then `.env`, then environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DATASET_PATH: &str = "AirBNB3.csv";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a socket address like 127.0.0.1:3000, got '{value}'")]
    BindAddr { name: &'static str, value: String },

    #[error("{name} must be an integer > 0, got '{value}'")]
    Workers { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("LISTINGS_CSV").filter(|p| !p.trim().is_empty()) {
            config.dataset_path = PathBuf::from(path.trim());
        }

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr.trim().parse().map_err(|_| ConfigError::BindAddr {
                name: "BIND_ADDR",
                value: addr.clone(),
            })?;
        }

        if let Some(workers) = lookup("MAX_WORKERS") {
            config.max_workers = workers
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::Workers {
                    name: "MAX_WORKERS",
                    value: workers.clone(),
                })?;
        }

        Ok(config)
    }
}
