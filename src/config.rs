use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::db::DbConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Process configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db: DbConfig,
}

impl Config {
    /// Reads `DATABASE_URL`, `HOST`, `PORT`, `DB_POOL_SIZE` and
    /// `DB_BUSY_TIMEOUT_MS`. Only `DATABASE_URL` is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let mut db = DbConfig::new(database_url);
        db.max_size = parse_or(&lookup, "DB_POOL_SIZE", db.max_size)?;
        let busy_timeout_ms = parse_or(&lookup, "DB_BUSY_TIMEOUT_MS", 5_000u64)?;
        db.busy_timeout = Duration::from_millis(busy_timeout_ms);

        Ok(Self { host, port, db })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
