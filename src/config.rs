use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none, require_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the ActionKit REST API
pub struct Credentials {
    /// Authorized ActionKit username
    pub username: String,
    /// Password for the ActionKit user
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the ActionKit API client
pub struct Config {
    /// The ActionKit domain (e.g. `myorg.actionkit.com`)
    pub domain: String,
    /// Authentication credentials
    pub credentials: Credentials,
    /// Default import page short name for bulk uploads
    pub import_page: Option<String>,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Config {
    /// Creates a configuration from explicit values with environment
    /// fallback
    ///
    /// Each required value is resolved from the argument first, then from
    /// `ACTION_KIT_DOMAIN`, `ACTION_KIT_USERNAME` and `ACTION_KIT_PASSWORD`.
    /// A `.env` file is loaded before resolution. Missing values fail with
    /// `AppError::MissingConfig` before any network call is made.
    pub fn new(
        domain: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Ok(Config {
            domain: require_env(domain, "ACTION_KIT_DOMAIN")?,
            credentials: Credentials {
                username: require_env(username, "ACTION_KIT_USERNAME")?,
                password: require_env(password, "ACTION_KIT_PASSWORD")?,
            },
            import_page: get_env_or_none("ACTION_KIT_IMPORTPAGE"),
            timeout: get_env_or_default("ACTION_KIT_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Creates a configuration entirely from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(None, None, None)
    }

    /// Returns the base URL all endpoint URLs are built from
    ///
    /// A bare domain gets the `https://` scheme prepended; a domain that
    /// already carries a scheme is used as-is, which lets tests point the
    /// client at a local mock server.
    pub fn base_url(&self) -> String {
        if self.domain.starts_with("http://") || self.domain.starts_with("https://") {
            self.domain.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.domain)
        }
    }
}
