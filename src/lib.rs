//! # ActionKit Client
//!
//! A Rust client for the ActionKit REST API. It covers the core resource
//! operations (users, campaigns, event pages and forms, page followups,
//! generic actions) and bulk user imports via multi-part upload.
//!
//! All API traffic goes through a single authenticated transport
//! ([`transport::http_client::AkHttpClient`]) that owns the Basic-auth
//! session, builds the `https://{domain}/rest/v1/{resource}/` endpoint URLs,
//! and translates HTTP failures into [`error::AppError`] values. The
//! per-resource services are thin compositions over that transport.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use actionkit_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let config = Arc::new(Config::from_env()?);
//! let client = Arc::new(AkHttpClientImpl::new(config.clone())?);
//!
//! let users = UserServiceImpl::new(client.clone());
//! let user = users.get_user(42).await?;
//! println!("{user}");
//! # Ok(())
//! # }
//! ```
//!
//! Credentials are resolved from explicit arguments or the
//! `ACTION_KIT_DOMAIN`, `ACTION_KIT_USERNAME` and `ACTION_KIT_PASSWORD`
//! environment variables (a `.env` file is honored).

/// Service interfaces, implementations and shared data types
pub mod application;
/// Client configuration loaded from arguments or the environment
pub mod config;
/// Global constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Convenient re-exports of the commonly used surface
pub mod prelude;
/// HTTP transport for the ActionKit REST API
pub mod transport;
/// Small helpers for configuration and logging
pub mod utils;

/// Library version, taken from the crate metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
