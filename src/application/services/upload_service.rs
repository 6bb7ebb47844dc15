use crate::application::interfaces::upload::UploadService;
use crate::application::models::upload::{TableSource, UploadReport, UploadSource, gzip};
use crate::config::Config;
use crate::constants::FAST_PATH_MAX_ROWS;
use crate::error::AppError;
use crate::transport::http_client::AkHttpClient;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::LOCATION;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Returns whether a header set qualifies for the server's fast-processing
/// path: nothing outside the identifier and `user_` field namespace
pub fn fast_path_eligible(headers: &[String]) -> bool {
    headers.iter().all(|h| h == "email" || h.starts_with("user_"))
}

/// Returns whether a table upload must be gzip-compressed
///
/// Compression disables the fast-processing path, but tables that miss the
/// path anyway, or that are so large an uncompressed payload could strain
/// memory, are compressed regardless.
pub fn requires_compression(fast_path: bool, rows: usize) -> bool {
    !fast_path || rows > FAST_PATH_MAX_ROWS
}

/// Implementation of the bulk upload service
pub struct UploadServiceImpl<T: AkHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: AkHttpClient> UploadServiceImpl<T> {
    /// Creates a new instance of the upload service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl<T: AkHttpClient + 'static> UploadService for UploadServiceImpl<T> {
    async fn bulk_upload_file(
        &self,
        source: UploadSource,
        import_page: &str,
        autocreate_user_fields: bool,
        user_fields_only: bool,
    ) -> Result<UploadReport, AppError> {
        let (data, file_name) = match source {
            UploadSource::Path(path) => {
                let file_name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("upload.csv")
                    .to_string();
                (tokio::fs::read(&path).await?, file_name)
            }
            UploadSource::Bytes { data, file_name } => (data, file_name),
        };

        debug!(
            "Uploading {} ({} bytes) to import page {}",
            file_name,
            data.len(),
            import_page
        );

        let form = Form::new()
            .part("upload", Part::bytes(data).file_name(file_name))
            .text("page", import_page.to_string())
            .text(
                "autocreate_user_fields",
                if autocreate_user_fields { "1" } else { "0" },
            )
            .text("user_fields_only", if user_fields_only { "1" } else { "0" });

        let resp = self.client.post_upload(form).await?;
        let status = resp.status();
        let progress_url = resp
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = resp.text().await.unwrap_or_default();

        let success = status == StatusCode::CREATED;
        if success {
            info!("Upload accepted, progress at {:?}", progress_url);
        } else {
            warn!("Upload rejected with status {}", status);
        }

        Ok(UploadReport {
            success,
            progress_url,
            status,
            body,
        })
    }

    async fn bulk_upload_table(
        &self,
        table: &dyn TableSource,
        import_page: Option<&str>,
        autocreate_user_fields: bool,
    ) -> Result<UploadReport, AppError> {
        let import_page = match import_page {
            Some(page) => page.to_string(),
            None => self
                .config
                .import_page
                .clone()
                .ok_or_else(|| AppError::MissingConfig("ACTION_KIT_IMPORTPAGE".to_string()))?,
        };

        let user_fields_only = fast_path_eligible(&table.headers());
        let compress = requires_compression(user_fields_only, table.row_count());
        debug!(
            "Table upload: {} rows, user_fields_only={}, compress={}",
            table.row_count(),
            user_fields_only,
            compress
        );

        let csv = table.to_csv()?;
        let source = if compress {
            UploadSource::Bytes {
                data: gzip(csv.as_bytes())?,
                file_name: "upload.csv.gz".to_string(),
            }
        } else {
            UploadSource::Bytes {
                data: csv.into_bytes(),
                file_name: "upload.csv".to_string(),
            }
        };

        self.bulk_upload_file(source, &import_page, autocreate_user_fields, user_fields_only)
            .await
    }
}
