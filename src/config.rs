use std::env;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub app_host: String,
    pub app_port: u16,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// `DATABASE_URL` wins over the individual `DB_*` parts when both are set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let db_host = var("DB_HOST", "127.0.0.1");
                let db_port = var("DB_PORT", "5432");
                let db_user = var("DB_USER", "postgres");
                let db_password = var("DB_PASSWORD", "password");
                let db_name = var("DB_NAME", "postgres");
                format!("postgres://{db_user}:{db_password}@{db_host}:{db_port}/{db_name}")
            }
        };

        Ok(Self {
            database_url,
            app_host: var("APP_HOST", "127.0.0.1"),
            app_port: parse("APP_PORT", var("APP_PORT", "8080"))?,
            max_connections: parse("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS", "10"))?,
            acquire_timeout_secs: parse(
                "DB_ACQUIRE_TIMEOUT_SECS",
                var("DB_ACQUIRE_TIMEOUT_SECS", "3"),
            )?,
        })
    }

    pub fn app_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}
