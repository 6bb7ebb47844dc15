use crate::application::models::upload::{TableSource, UploadReport, UploadSource};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for bulk user imports
///
/// Uploads report failure through `UploadReport::success` rather than an
/// error: a rejected import usually needs row-level diagnostics that only
/// the raw response body carries.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Uploads a CSV file of new users or user updates
    ///
    /// Blank values in columns overwrite existing data, and the server
    /// rejects files larger than 128M. If an upload comes back with a 500,
    /// retrying with a much smaller file (say, one row) is more likely to
    /// produce a proper 400 with a useful error message.
    ///
    /// # Arguments
    /// * `source` - The csv (optionally gzip'd) file path or its content;
    ///   a `user_id` or `email` column is required
    /// * `import_page` - The import page short name
    /// * `autocreate_user_fields` - When true, columns starting with
    ///   `user_` are created as user fields on the fly
    /// * `user_fields_only` - Signals the server that only identifier and
    ///   user-field columns are present, enabling its fast-processing path
    ///   (which gzip'd content disables)
    async fn bulk_upload_file(
        &self,
        source: UploadSource,
        import_page: &str,
        autocreate_user_fields: bool,
        user_fields_only: bool,
    ) -> Result<UploadReport, AppError>;

    /// Uploads a table of new users or user updates
    ///
    /// Derives `user_fields_only` from the column headers and picks the
    /// upload encoding: tables that miss the fast path, or that are large
    /// enough that an uncompressed payload could strain memory, are
    /// gzip-compressed before upload.
    ///
    /// # Arguments
    /// * `table` - Tabular data; a `user_id` or `email` column is required
    /// * `import_page` - The import page short name; falls back to the
    ///   configured default when `None`
    /// * `autocreate_user_fields` - When true, columns starting with
    ///   `user_` are created as user fields on the fly
    async fn bulk_upload_table(
        &self,
        table: &dyn TableSource,
        import_page: Option<&str>,
        autocreate_user_fields: bool,
    ) -> Result<UploadReport, AppError>;
}
