use crate::error::AppError;
use flate2::Compression;
use flate2::write::GzEncoder;
use reqwest::StatusCode;
use std::io::Write;
use std::path::PathBuf;

/// Source data for a bulk upload
///
/// A `Path` is opened and read inside the upload call, so the handle is
/// scoped to the request on success and failure paths alike. Callers that
/// already hold the bytes (or stream from elsewhere) use `Bytes`.
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// A CSV (optionally gzip'd) file on disk
    Path(PathBuf),
    /// In-memory file content with the name to present to the server
    Bytes {
        /// Raw file content
        data: Vec<u8>,
        /// File name submitted with the multi-part field
        file_name: String,
    },
}

/// Result of a bulk upload request
///
/// Upload failures are not surfaced as errors: row-level diagnostics live
/// in the response body, so the caller checks `success` and inspects the
/// raw `body` when it is false.
#[derive(Debug, Clone)]
pub struct UploadReport {
    /// Whether the server accepted the upload (exactly HTTP 201)
    pub success: bool,
    /// Progress-polling URL from the `Location` header, when present
    pub progress_url: Option<String>,
    /// HTTP status the server returned
    pub status: StatusCode,
    /// Raw response body text for caller inspection
    pub body: String,
}

/// Interface for the tabular data collaborator behind table uploads
///
/// Implementations provide ordered column headers, a row count, and a CSV
/// serialization of the whole table. Compression is applied by the upload
/// service, not the provider.
pub trait TableSource: Send + Sync {
    /// Ordered list of column headers
    fn headers(&self) -> Vec<String>;
    /// Number of data rows, excluding the header
    fn row_count(&self) -> usize;
    /// Serializes the table to CSV text
    fn to_csv(&self) -> Result<String, AppError>;
}

/// Gzip-compresses an upload payload
pub fn gzip(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
