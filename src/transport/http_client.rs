// HTTP transport for the ActionKit REST API

use crate::application::models::fields::{Created, FieldMap};
use crate::config::Config;
use crate::constants::{REST_BASE_PATH, USER_AGENT};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, LOCATION};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Central transport for all ActionKit API requests
///
/// Owns authentication, endpoint URL construction and error translation.
/// Every resource operation and the bulk importer goes through this trait;
/// no call bypasses the authenticated session.
#[async_trait]
pub trait AkHttpClient: Send + Sync {
    /// Builds the endpoint URL for a resource, with the entity id appended
    /// when given
    fn endpoint(&self, resource: &str, entity_id: Option<u64>) -> String;

    /// Makes an authenticated GET request
    ///
    /// # Arguments
    /// * `resource` - Resource path, e.g. `user` or `user/schema`
    /// * `entity_id` - Optional entity id appended to the endpoint
    /// * `not_found` - When supplied, a 404 response fails with
    ///   `AppError::NotFound` carrying this message plus any structured
    ///   error detail from the body
    ///
    /// # Returns
    /// The parsed JSON body
    async fn get(
        &self,
        resource: &str,
        entity_id: Option<u64>,
        not_found: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Makes an authenticated POST request with a JSON body
    ///
    /// Success is exactly HTTP 201; any other status fails with
    /// `AppError::RequestFailed` carrying `failure` plus structured error
    /// detail. On success the `Location` header is returned unless
    /// `return_full_body` asks for the parsed JSON body instead.
    async fn post(
        &self,
        resource: &str,
        failure: &str,
        return_full_body: bool,
        fields: &FieldMap,
    ) -> Result<Created, AppError>;

    /// Makes an authenticated PATCH request with a JSON body
    ///
    /// The response status is logged, never raised on.
    async fn patch(
        &self,
        resource: &str,
        entity_id: u64,
        fields: &FieldMap,
    ) -> Result<(), AppError>;

    /// Makes an authenticated DELETE request
    ///
    /// The response status is logged, never raised on.
    async fn delete(&self, resource: &str, entity_id: u64) -> Result<(), AppError>;

    /// Posts a multi-part form to the `upload` endpoint
    ///
    /// Uses the upload session, which accepts JSON responses but lets the
    /// multi-part encoder set its own content type.
    async fn post_upload(&self, form: Form) -> Result<Response, AppError>;
}

/// Appends ActionKit's structured error detail to a failure message
///
/// When the response body is JSON with an `errors` key, the detail is
/// appended as `"\n" + items.join(",")` for a list, or one
/// `"\n{field}: {messages.join(",")}"` line per field for a mapping.
/// Anything else leaves the message untouched.
pub fn parse_error(message: &str, body: &[u8]) -> String {
    let mut message = message.to_string();
    let Ok(json) = serde_json::from_slice::<Value>(body) else {
        return message;
    };
    match json.get("errors") {
        Some(Value::Array(items)) => {
            let joined: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            message.push('\n');
            message.push_str(&joined.join(","));
        }
        Some(Value::Object(fields)) => {
            for (name, messages) in fields {
                let joined: Vec<&str> = messages
                    .as_array()
                    .map(|list| list.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();
                message.push_str(&format!("\n{name}: {}", joined.join(",")));
            }
        }
        _ => {}
    }
    message
}

/// Implementation of the ActionKit transport over reqwest
///
/// Holds two persistent connections created at construction: the JSON
/// session with `content-type`/`accepts` defaults for CRUD traffic, and an
/// upload session carrying only `accepts` so multi-part requests can set
/// their own content type. Both attach Basic auth from the configured
/// credentials on every request. The client has no interior mutability;
/// sequential reuse is the supported mode.
pub struct AkHttpClientImpl {
    config: Arc<Config>,
    http: Client,
    upload_http: Client,
}

impl AkHttpClientImpl {
    /// Creates a new transport from the given configuration
    ///
    /// # Returns
    /// * `Ok(AkHttpClientImpl)` - Transport ready to use
    /// * `Err(AppError)` - If either underlying client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let accepts = HeaderName::from_static("accepts");
        let json_value = HeaderValue::from_static("application/json");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, json_value.clone());
        default_headers.insert(accepts.clone(), json_value.clone());

        let mut upload_headers = HeaderMap::new();
        upload_headers.insert(accepts, json_value);

        let timeout = Duration::from_secs(config.timeout);
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers)
            .timeout(timeout)
            .build()?;
        let upload_http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(upload_headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            config,
            http,
            upload_http,
        })
    }

    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(
            &self.config.credentials.username,
            Some(&self.config.credentials.password),
        )
    }
}

#[async_trait]
impl AkHttpClient for AkHttpClientImpl {
    fn endpoint(&self, resource: &str, entity_id: Option<u64>) -> String {
        let mut url = format!("{}{REST_BASE_PATH}/{resource}/", self.config.base_url());
        if let Some(id) = entity_id {
            url.push_str(&format!("{id}/"));
        }
        url
    }

    async fn get(
        &self,
        resource: &str,
        entity_id: Option<u64>,
        not_found: Option<&str>,
    ) -> Result<Value, AppError> {
        let url = self.endpoint(resource, entity_id);
        debug!("GET {}", url);

        let resp = self.authenticated(self.http.get(&url)).send().await?;
        let status = resp.status();
        debug!("Response status: {}", status);

        if let Some(message) = not_found {
            if status == StatusCode::NOT_FOUND {
                let body = resp.bytes().await?;
                return Err(AppError::NotFound(parse_error(message, &body)));
            }
        }

        Ok(resp.json().await?)
    }

    async fn post(
        &self,
        resource: &str,
        failure: &str,
        return_full_body: bool,
        fields: &FieldMap,
    ) -> Result<Created, AppError> {
        let url = self.endpoint(resource, None);
        debug!("POST {}", url);

        let resp = self
            .authenticated(self.http.post(&url))
            .json(fields)
            .send()
            .await?;
        let status = resp.status();
        debug!("Response status: {}", status);

        if status != StatusCode::CREATED {
            let body = resp.bytes().await?;
            return Err(AppError::RequestFailed(parse_error(failure, &body)));
        }

        if !return_full_body {
            if let Some(location) = resp
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
            {
                return Ok(Created::Location(location.to_string()));
            }
        }

        // Not all create responses carry a body
        match resp.json::<Value>().await {
            Ok(body) => Ok(Created::Body(body)),
            Err(_) => Ok(Created::Empty),
        }
    }

    async fn patch(
        &self,
        resource: &str,
        entity_id: u64,
        fields: &FieldMap,
    ) -> Result<(), AppError> {
        let url = self.endpoint(resource, Some(entity_id));
        debug!("PATCH {}", url);

        let resp = self
            .authenticated(self.http.patch(&url))
            .json(fields)
            .send()
            .await?;
        info!("{}: {}", resp.status().as_u16(), entity_id);
        Ok(())
    }

    async fn delete(&self, resource: &str, entity_id: u64) -> Result<(), AppError> {
        let url = self.endpoint(resource, Some(entity_id));
        debug!("DELETE {}", url);

        let resp = self.authenticated(self.http.delete(&url)).send().await?;
        info!("{}: {}", resp.status().as_u16(), entity_id);
        Ok(())
    }

    async fn post_upload(&self, form: Form) -> Result<Response, AppError> {
        let url = self.endpoint("upload", None);
        debug!("POST {} (multipart)", url);

        let resp = self
            .authenticated(self.upload_http.post(&url))
            .multipart(form)
            .send()
            .await?;
        debug!("Response status: {}", resp.status());
        Ok(resp)
    }
}
