use crate::application::models::fields::{Created, FieldMap};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the user service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a user record by id
    async fn get_user(&self, user_id: u64) -> Result<Value, AppError>;

    /// Gets the list of valid user fields that can be passed to
    /// `create_user`
    async fn get_user_fields(&self) -> Result<Vec<String>, AppError>;

    /// Creates a user
    ///
    /// # Arguments
    /// * `email` - Email for the user
    /// * `extra` - Additional user fields; the required email cannot be
    ///   overridden from here
    async fn create_user(&self, email: &str, extra: FieldMap) -> Result<Created, AppError>;

    /// Updates a user
    ///
    /// The response status is logged, never raised on; this is a
    /// fire-and-forget update.
    async fn update_user(&self, user_id: u64, fields: FieldMap) -> Result<(), AppError>;

    /// Deletes a user
    ///
    /// The response status is logged, never raised on.
    async fn delete_user(&self, user_id: u64) -> Result<(), AppError>;
}
