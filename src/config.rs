// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    max_validation_depth: usize,
    max_body_bytes: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_validation_depth() -> usize {
    crate::application::validation::DEFAULT_MAX_DEPTH
}

fn default_max_body_bytes() -> usize {
    crate::presentation::http::routes::DEFAULT_BODY_LIMIT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            max_validation_depth: default_max_validation_depth(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let max_validation_depth = match lookup("VALIDATION_MAX_DEPTH") {
            Some(raw) => parse_positive("VALIDATION_MAX_DEPTH", &raw)?,
            None => default_max_validation_depth(),
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(raw) => parse_positive("MAX_BODY_BYTES", &raw)?,
            None => default_max_body_bytes(),
        };

        Ok(Self {
            listen_addr,
            max_validation_depth,
            max_body_bytes,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn max_validation_depth(&self) -> usize {
        self.max_validation_depth
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
