use crate::application::models::fields::{Created, FieldMap};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the campaign service
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Gets a campaign record by id
    async fn get_campaign(&self, campaign_id: u64) -> Result<Value, AppError>;

    /// Gets the list of valid campaign fields that can be passed to
    /// `create_campaign`
    async fn get_campaign_fields(&self) -> Result<Vec<String>, AppError>;

    /// Creates a campaign
    ///
    /// # Arguments
    /// * `name` - The name of the campaign to create
    /// * `extra` - Additional campaign fields
    async fn create_campaign(&self, name: &str, extra: FieldMap) -> Result<Created, AppError>;
}
