//! Connection settings: credentials plus the endpoint they are sent to.
//!
//! `Config::new` performs no validation; empty credentials are forwarded
//! and the service answers with an authentication error. `Config::from_env`
//! is the strict entry point and refuses to build without both variables.

use std::env;

use url::Url;

use crate::error::ConfigError;

/// Production endpoint of the FlightXML2 JSON API.
pub const DEFAULT_BASE_URL: &str = "https://flightxml.flightaware.com/json/FlightXML2";

pub const USERNAME_VAR: &str = "FLIGHTAWARE_USERNAME";
pub const API_KEY_VAR: &str = "FLIGHTAWARE_API_KEY";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    username: String,
    api_key: String,
    base_url: String,
}

impl Config {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read credentials from `FLIGHTAWARE_USERNAME` and `FLIGHTAWARE_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = read_var(USERNAME_VAR)?;
        let api_key = read_var(API_KEY_VAR)?;
        Ok(Self::new(username, api_key))
    }

    /// Point the client at another endpoint (a mock server, a proxy).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Keeps the key out of logs and panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn read_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
