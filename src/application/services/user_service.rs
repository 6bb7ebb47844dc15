use crate::application::interfaces::user::UserService;
use crate::application::models::fields::{Created, FieldMap, schema_field_names};
use crate::error::AppError;
use crate::transport::http_client::AkHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the user service
pub struct UserServiceImpl<T: AkHttpClient> {
    client: Arc<T>,
}

impl<T: AkHttpClient> UserServiceImpl<T> {
    /// Creates a new instance of the user service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: AkHttpClient + 'static> UserService for UserServiceImpl<T> {
    async fn get_user(&self, user_id: u64) -> Result<Value, AppError> {
        debug!("Getting user: {}", user_id);
        self.client
            .get("user", Some(user_id), Some("User not found"))
            .await
    }

    async fn get_user_fields(&self) -> Result<Vec<String>, AppError> {
        let schema = self.client.get("user/schema", None, None).await?;
        Ok(schema_field_names(&schema))
    }

    async fn create_user(&self, email: &str, extra: FieldMap) -> Result<Created, AppError> {
        debug!("Creating user: {}", email);
        let mut fields = extra;
        fields.insert("email".to_string(), Value::from(email));
        self.client
            .post("user", "Could not create user", false, &fields)
            .await
    }

    async fn update_user(&self, user_id: u64, fields: FieldMap) -> Result<(), AppError> {
        debug!("Updating user: {}", user_id);
        self.client.patch("user", user_id, &fields).await
    }

    async fn delete_user(&self, user_id: u64) -> Result<(), AppError> {
        debug!("Deleting user: {}", user_id);
        self.client.delete("user", user_id).await
    }
}
