use crate::application::interfaces::campaign::CampaignService;
use crate::application::models::fields::{Created, FieldMap, schema_field_names};
use crate::error::AppError;
use crate::transport::http_client::AkHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the campaign service
pub struct CampaignServiceImpl<T: AkHttpClient> {
    client: Arc<T>,
}

impl<T: AkHttpClient> CampaignServiceImpl<T> {
    /// Creates a new instance of the campaign service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: AkHttpClient + 'static> CampaignService for CampaignServiceImpl<T> {
    async fn get_campaign(&self, campaign_id: u64) -> Result<Value, AppError> {
        debug!("Getting campaign: {}", campaign_id);
        self.client
            .get("campaign", Some(campaign_id), Some("Campaign not found"))
            .await
    }

    async fn get_campaign_fields(&self) -> Result<Vec<String>, AppError> {
        let schema = self.client.get("campaign/schema", None, None).await?;
        Ok(schema_field_names(&schema))
    }

    async fn create_campaign(&self, name: &str, extra: FieldMap) -> Result<Created, AppError> {
        debug!("Creating campaign: {}", name);
        let mut fields = extra;
        fields.insert("name".to_string(), Value::from(name));
        self.client
            .post("campaign", "Could not create campaign", false, &fields)
            .await
    }
}
