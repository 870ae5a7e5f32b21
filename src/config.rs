// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    default_locale: String,
    messages_path: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_locale() -> String {
    "en".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let default_locale = env::var("DEFAULT_LOCALE").unwrap_or_else(|_| default_locale());
        if default_locale.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "DEFAULT_LOCALE must not be empty".into(),
            ));
        }

        let messages_path = env::var("MESSAGES_PATH").ok().filter(|p| !p.is_empty());

        Ok(Self {
            listen_addr,
            default_locale,
            messages_path,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Path to an optional JSON message-catalog document.
    pub fn messages_path(&self) -> Option<&str> {
        self.messages_path.as_deref()
    }
}
