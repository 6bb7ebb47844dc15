use crate::application::models::fields::FieldMap;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for posting generic actions
#[async_trait]
pub trait ActionService: Send + Sync {
    /// Posts a generic action to a page
    ///
    /// Exactly one of `email` or `ak_id` identifies the acting user;
    /// supplying neither or both fails with `AppError::InvalidInput`.
    /// Generic actions may return processing metadata, so the full JSON
    /// body is requested rather than the `Location` header.
    ///
    /// # Arguments
    /// * `page` - The page short name to post the action to
    /// * `email` - Email address of the acting user
    /// * `ak_id` - ActionKit id of the acting user
    /// * `extra` - Additional action fields
    ///
    /// # Returns
    /// The response body, or `None` when the server sent none
    async fn create_generic_action(
        &self,
        page: &str,
        email: Option<&str>,
        ak_id: Option<u64>,
        extra: FieldMap,
    ) -> Result<Option<Value>, AppError>;
}
