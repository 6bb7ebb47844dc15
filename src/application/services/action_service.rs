use crate::application::interfaces::action::ActionService;
use crate::application::models::fields::{Created, FieldMap};
use crate::error::AppError;
use crate::transport::http_client::AkHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the generic action service
pub struct ActionServiceImpl<T: AkHttpClient> {
    client: Arc<T>,
}

impl<T: AkHttpClient> ActionServiceImpl<T> {
    /// Creates a new instance of the action service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: AkHttpClient + 'static> ActionService for ActionServiceImpl<T> {
    async fn create_generic_action(
        &self,
        page: &str,
        email: Option<&str>,
        ak_id: Option<u64>,
        extra: FieldMap,
    ) -> Result<Option<Value>, AppError> {
        if email.is_some() == ak_id.is_some() {
            return Err(AppError::InvalidInput(
                "One of email or ak_id is required.".to_string(),
            ));
        }

        debug!("Posting action to page: {}", page);
        let mut fields = extra;
        fields.insert("page".to_string(), Value::from(page));
        if let Some(email) = email {
            fields.insert("email".to_string(), Value::from(email));
        }
        if let Some(ak_id) = ak_id {
            fields.insert("ak_id".to_string(), Value::from(ak_id));
        }

        match self
            .client
            .post("action", "Could not create action.", true, &fields)
            .await?
        {
            Created::Body(body) => Ok(Some(body)),
            Created::Location(_) | Created::Empty => Ok(None),
        }
    }
}
