use actionkit_client::application::models::upload::{TableSource, UploadSource};
use actionkit_client::application::services::UploadService;
use actionkit_client::application::services::upload_service::UploadServiceImpl;
use actionkit_client::config::{Config, Credentials};
use actionkit_client::error::AppError;
use actionkit_client::transport::http_client::AkHttpClientImpl;
use mockito::{Matcher, Server};
use std::sync::Arc;

fn test_service(server_url: &str, import_page: Option<&str>) -> UploadServiceImpl<AkHttpClientImpl> {
    let config = Arc::new(Config {
        domain: server_url.to_string(),
        credentials: Credentials {
            username: "test_user".to_string(),
            password: "test_password".to_string(),
        },
        import_page: import_page.map(str::to_string),
        timeout: 30,
    });
    let client = Arc::new(AkHttpClientImpl::new(config.clone()).expect("transport should build"));
    UploadServiceImpl::new(config, client)
}

// Minimal tabular collaborator used to drive the table upload paths
struct MemoryTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MemoryTable {
    fn new(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }
}

impl TableSource for MemoryTable {
    fn headers(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn to_csv(&self) -> Result<String, AppError> {
        let mut csv = self.headers.join(",");
        csv.push('\n');
        for row in &self.rows {
            csv.push_str(&row.join(","));
            csv.push('\n');
        }
        Ok(csv)
    }
}

fn form_field(name: &str, value: &str) -> Matcher {
    Matcher::Regex(format!(r#"name="{name}"\r\n\r\n{value}"#))
}

#[tokio::test]
async fn bulk_upload_file_reports_success_and_progress_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/upload/")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
        .match_body(Matcher::AllOf(vec![
            form_field("page", "member_import"),
            form_field("autocreate_user_fields", "0"),
            form_field("user_fields_only", "1"),
            Matcher::Regex(r#"filename="members.csv""#.to_string()),
            Matcher::Regex("email,user_zip".to_string()),
        ]))
        .with_status(201)
        .with_header("Location", "/rest/v1/uploadprogress/12/")
        .create_async()
        .await;

    let service = test_service(&server.url(), None);
    let report = service
        .bulk_upload_file(
            UploadSource::Bytes {
                data: b"email,user_zip\na@example.com,02145\n".to_vec(),
                file_name: "members.csv".to_string(),
            },
            "member_import",
            false,
            true,
        )
        .await
        .expect("upload request should go through");

    assert!(report.success);
    assert_eq!(report.status.as_u16(), 201);
    assert_eq!(
        report.progress_url.as_deref(),
        Some("/rest/v1/uploadprogress/12/")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn bulk_upload_file_failure_is_reported_not_raised() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/rest/v1/upload/")
        .with_status(400)
        .with_body(r#"{"errors": {"upload": ["missing email column"]}}"#)
        .create_async()
        .await;

    let service = test_service(&server.url(), None);
    let report = service
        .bulk_upload_file(
            UploadSource::Bytes {
                data: b"zip\n02145\n".to_vec(),
                file_name: "members.csv".to_string(),
            },
            "member_import",
            false,
            false,
        )
        .await
        .expect("rejections are reported, not raised");

    assert!(!report.success);
    assert_eq!(report.status.as_u16(), 400);
    assert!(report.progress_url.is_none());
    assert!(report.body.contains("missing email column"));
}

#[tokio::test]
async fn bulk_upload_file_reads_path_sources() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/upload/")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"filename="ak_upload_test.csv""#.to_string()),
            Matcher::Regex("email\na@example.com".to_string()),
        ]))
        .with_status(201)
        .create_async()
        .await;

    let path = std::env::temp_dir().join("ak_upload_test.csv");
    std::fs::write(&path, "email\na@example.com\n").expect("write temp file");

    let service = test_service(&server.url(), None);
    let report = service
        .bulk_upload_file(UploadSource::Path(path.clone()), "member_import", true, false)
        .await
        .expect("upload request should go through");

    std::fs::remove_file(&path).ok();
    assert!(report.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn bulk_upload_file_missing_path_is_io_error() {
    let service = test_service("http://127.0.0.1:1", None);
    let err = service
        .bulk_upload_file(
            UploadSource::Path("/nonexistent/ak_upload.csv".into()),
            "member_import",
            false,
            false,
        )
        .await
        .expect_err("missing file should fail before any request");

    assert!(matches!(err, AppError::Io(_)));
}

#[tokio::test]
async fn table_with_user_columns_uploads_uncompressed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/upload/")
        .match_body(Matcher::AllOf(vec![
            form_field("page", "member_import"),
            form_field("user_fields_only", "1"),
            Matcher::Regex(r#"filename="upload.csv""#.to_string()),
            Matcher::Regex("email,user_zip\na@example.com,02145".to_string()),
        ]))
        .with_status(201)
        .create_async()
        .await;

    let table = MemoryTable::new(
        &["email", "user_zip"],
        &[&["a@example.com", "02145"], &["b@example.com", "02139"]],
    );
    let service = test_service(&server.url(), None);
    let report = service
        .bulk_upload_table(&table, Some("member_import"), false)
        .await
        .expect("table upload should go through");

    assert!(report.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn table_with_foreign_columns_uploads_gzipped() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/upload/")
        .match_body(Matcher::AllOf(vec![
            form_field("user_fields_only", "0"),
            Matcher::Regex(r#"filename="upload.csv.gz""#.to_string()),
        ]))
        .with_status(201)
        .create_async()
        .await;

    let table = MemoryTable::new(&["email", "phone"], &[&["a@example.com", "5551234"]]);
    let service = test_service(&server.url(), None);
    let report = service
        .bulk_upload_table(&table, Some("member_import"), false)
        .await
        .expect("table upload should go through");

    assert!(report.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn table_upload_falls_back_to_configured_import_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/upload/")
        .match_body(form_field("page", "default_import"))
        .with_status(201)
        .create_async()
        .await;

    let table = MemoryTable::new(&["email"], &[&["a@example.com"]]);
    let service = test_service(&server.url(), Some("default_import"));
    let report = service
        .bulk_upload_table(&table, None, false)
        .await
        .expect("table upload should go through");

    assert!(report.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn table_upload_without_import_page_is_missing_config() {
    let table = MemoryTable::new(&["email"], &[&["a@example.com"]]);
    let service = test_service("http://127.0.0.1:1", None);
    let err = service
        .bulk_upload_table(&table, None, false)
        .await
        .expect_err("no import page configured");

    match err {
        AppError::MissingConfig(var) => assert_eq!(var, "ACTION_KIT_IMPORTPAGE"),
        other => panic!("Unexpected error: {other:?}"),
    }
}
