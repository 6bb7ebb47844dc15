use crate::application::models::fields::{Created, FieldMap};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for event pages, event forms and page followups
///
/// These resources form a small hierarchy: create pages and signup pages
/// belong to a campaign, forms belong to a page, and followups belong to a
/// signup page. The create operations rewrite the parent id into the
/// relative reference path ActionKit expects.
#[async_trait]
pub trait EventService: Send + Sync {
    /// Gets an event create page by id
    async fn get_event_create_page(&self, page_id: u64) -> Result<Value, AppError>;

    /// Gets the list of valid event create page fields
    async fn get_event_create_page_fields(&self) -> Result<Vec<String>, AppError>;

    /// Adds an event create page to a campaign
    ///
    /// # Arguments
    /// * `name` - The name of the page to create
    /// * `campaign_id` - The campaign to associate the page with
    /// * `title` - The title of the page to create
    /// * `extra` - Additional page fields
    async fn create_event_create_page(
        &self,
        name: &str,
        campaign_id: u64,
        title: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError>;

    /// Gets an event create form by id
    async fn get_event_create_form(&self, form_id: u64) -> Result<Value, AppError>;

    /// Gets the list of valid event create form fields
    async fn get_event_create_form_fields(&self) -> Result<Vec<String>, AppError>;

    /// Creates an event create form on a page
    ///
    /// # Arguments
    /// * `page_id` - The page to associate the form with
    /// * `thank_you_text` - Free form thank you text
    /// * `extra` - Additional form fields
    async fn create_event_create_form(
        &self,
        page_id: u64,
        thank_you_text: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError>;

    /// Gets an event signup page by id
    async fn get_event_signup_page(&self, page_id: u64) -> Result<Value, AppError>;

    /// Gets the list of valid event signup page fields
    async fn get_event_signup_page_fields(&self) -> Result<Vec<String>, AppError>;

    /// Adds an event signup page to a campaign
    async fn create_event_signup_page(
        &self,
        name: &str,
        campaign_id: u64,
        title: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError>;

    /// Gets an event signup form by id
    async fn get_event_signup_form(&self, form_id: u64) -> Result<Value, AppError>;

    /// Gets the list of valid event signup form fields
    async fn get_event_signup_form_fields(&self) -> Result<Vec<String>, AppError>;

    /// Creates an event signup form on a page
    async fn create_event_signup_form(
        &self,
        page_id: u64,
        thank_you_text: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError>;

    /// Gets a page followup by id
    async fn get_page_followup(&self, followup_id: u64) -> Result<Value, AppError>;

    /// Gets the list of valid page followup fields
    async fn get_page_followup_fields(&self) -> Result<Vec<String>, AppError>;

    /// Adds a followup to a signup page
    ///
    /// # Arguments
    /// * `signup_page_id` - The signup page to associate the followup with
    /// * `url` - URL of the followup page
    /// * `extra` - Additional followup fields
    async fn create_page_followup(
        &self,
        signup_page_id: u64,
        url: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError>;
}
