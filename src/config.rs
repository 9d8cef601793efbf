// src/config.rs
use crate::presentation::http::error::MessageExposure;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    message_exposure: MessageExposure,
    seed_demo_tours: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_flag(key: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "" | "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
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
        F: Fn(&'static str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        if listen_addr.trim().is_empty() {
            return Err(ConfigError::Missing("LISTEN_ADDR"));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| parse_origins(&s))
            .unwrap_or_else(default_allowed_origins);

        let message_exposure =
            if parse_flag("EXPOSE_UNEXPECTED_ERRORS", lookup("EXPOSE_UNEXPECTED_ERRORS"))? {
                MessageExposure::Verbose
            } else {
                MessageExposure::Sanitized
            };

        let seed_demo_tours = parse_flag("SEED_DEMO_TOURS", lookup("SEED_DEMO_TOURS"))?;

        Ok(Self {
            listen_addr,
            allowed_origins,
            message_exposure,
            seed_demo_tours,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn message_exposure(&self) -> MessageExposure {
        self.message_exposure
    }

    pub fn seed_demo_tours(&self) -> bool {
        self.seed_demo_tours
    }
}
