//! # ActionKit Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use actionkit_client::prelude::*;
//!
//! # fn run() -> Result<(), AppError> {
//! let config = Arc::new(Config::from_env()?);
//! let client = Arc::new(AkHttpClientImpl::new(config)?);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the ActionKit API client
pub use crate::config::{Config, Credentials};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::AkHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::AkHttpClientImpl;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// User service trait for user record operations
pub use crate::application::interfaces::user::UserService;

/// Campaign service trait for campaign operations
pub use crate::application::interfaces::campaign::CampaignService;

/// Event service trait for pages, forms and followups
pub use crate::application::interfaces::event::EventService;

/// Action service trait for posting generic actions
pub use crate::application::interfaces::action::ActionService;

/// Upload service trait for bulk user imports
pub use crate::application::interfaces::upload::UploadService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// User service implementation
pub use crate::application::services::user_service::UserServiceImpl;

/// Campaign service implementation
pub use crate::application::services::campaign_service::CampaignServiceImpl;

/// Event service implementation
pub use crate::application::services::event_service::EventServiceImpl;

/// Action service implementation
pub use crate::application::services::action_service::ActionServiceImpl;

/// Upload service implementation
pub use crate::application::services::upload_service::UploadServiceImpl;

// ============================================================================
// COMMON TYPES
// ============================================================================

/// Field bags, create outcomes and reference paths
pub use crate::application::models::fields::{Created, FieldMap, resource_ref};

/// Upload sources, reports and the tabular data interface
pub use crate::application::models::upload::{TableSource, UploadReport, UploadSource};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde_json::{Map, Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
