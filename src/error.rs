use thiserror::Error;

/// Main error type for the library
///
/// Request-building and transport failures convert automatically; the
/// domain variants carry messages already augmented with any structured
/// error detail the API returned.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required configuration value was missing from both the explicit
    /// argument and the environment
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    /// A GET for a specific record returned 404
    #[error("not found: {0}")]
    NotFound(String),

    /// A create POST did not return 201
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// A caller-supplied argument violated an operation precondition
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// HTTP transport error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading an upload source or compressing a payload
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
