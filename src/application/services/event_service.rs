use crate::application::interfaces::event::EventService;
use crate::application::models::fields::{Created, FieldMap, resource_ref, schema_field_names};
use crate::error::AppError;
use crate::transport::http_client::AkHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the event page, form and followup service
pub struct EventServiceImpl<T: AkHttpClient> {
    client: Arc<T>,
}

impl<T: AkHttpClient> EventServiceImpl<T> {
    /// Creates a new instance of the event service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    async fn schema_fields(&self, resource: &str) -> Result<Vec<String>, AppError> {
        let schema = self
            .client
            .get(&format!("{resource}/schema"), None, None)
            .await?;
        Ok(schema_field_names(&schema))
    }
}

#[async_trait]
impl<T: AkHttpClient + 'static> EventService for EventServiceImpl<T> {
    async fn get_event_create_page(&self, page_id: u64) -> Result<Value, AppError> {
        debug!("Getting event create page: {}", page_id);
        self.client
            .get(
                "eventcreatepage",
                Some(page_id),
                Some("Event create page not found"),
            )
            .await
    }

    async fn get_event_create_page_fields(&self) -> Result<Vec<String>, AppError> {
        self.schema_fields("eventcreatepage").await
    }

    async fn create_event_create_page(
        &self,
        name: &str,
        campaign_id: u64,
        title: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError> {
        debug!("Creating event create page {} for campaign {}", name, campaign_id);
        let mut fields = extra;
        fields.insert(
            "campaign".to_string(),
            Value::from(resource_ref("campaign", campaign_id)),
        );
        fields.insert("name".to_string(), Value::from(name));
        fields.insert("title".to_string(), Value::from(title));
        self.client
            .post(
                "eventcreatepage",
                "Could not create event create page",
                false,
                &fields,
            )
            .await
    }

    async fn get_event_create_form(&self, form_id: u64) -> Result<Value, AppError> {
        debug!("Getting event create form: {}", form_id);
        self.client
            .get(
                "eventcreateform",
                Some(form_id),
                Some("Event create form not found"),
            )
            .await
    }

    async fn get_event_create_form_fields(&self) -> Result<Vec<String>, AppError> {
        self.schema_fields("eventcreateform").await
    }

    async fn create_event_create_form(
        &self,
        page_id: u64,
        thank_you_text: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError> {
        debug!("Creating event create form for page {}", page_id);
        let mut fields = extra;
        fields.insert(
            "page".to_string(),
            Value::from(resource_ref("eventcreatepage", page_id)),
        );
        fields.insert("thank_you_text".to_string(), Value::from(thank_you_text));
        self.client
            .post(
                "eventcreateform",
                "Could not create event create form",
                false,
                &fields,
            )
            .await
    }

    async fn get_event_signup_page(&self, page_id: u64) -> Result<Value, AppError> {
        debug!("Getting event signup page: {}", page_id);
        self.client
            .get(
                "eventsignuppage",
                Some(page_id),
                Some("Event signup page not found"),
            )
            .await
    }

    async fn get_event_signup_page_fields(&self) -> Result<Vec<String>, AppError> {
        self.schema_fields("eventsignuppage").await
    }

    async fn create_event_signup_page(
        &self,
        name: &str,
        campaign_id: u64,
        title: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError> {
        debug!("Creating event signup page {} for campaign {}", name, campaign_id);
        let mut fields = extra;
        fields.insert(
            "campaign".to_string(),
            Value::from(resource_ref("campaign", campaign_id)),
        );
        fields.insert("name".to_string(), Value::from(name));
        fields.insert("title".to_string(), Value::from(title));
        self.client
            .post(
                "eventsignuppage",
                "Could not create signup page",
                false,
                &fields,
            )
            .await
    }

    async fn get_event_signup_form(&self, form_id: u64) -> Result<Value, AppError> {
        debug!("Getting event signup form: {}", form_id);
        self.client
            .get(
                "eventsignupform",
                Some(form_id),
                Some("Event signup form not found"),
            )
            .await
    }

    async fn get_event_signup_form_fields(&self) -> Result<Vec<String>, AppError> {
        self.schema_fields("eventsignupform").await
    }

    async fn create_event_signup_form(
        &self,
        page_id: u64,
        thank_you_text: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError> {
        debug!("Creating event signup form for page {}", page_id);
        // Signup forms reference their page through the generic page
        // resource, unlike create forms.
        let mut fields = extra;
        fields.insert(
            "page".to_string(),
            Value::from(resource_ref("page", page_id)),
        );
        fields.insert("thank_you_text".to_string(), Value::from(thank_you_text));
        self.client
            .post(
                "eventsignupform",
                "Could not create event signup form",
                false,
                &fields,
            )
            .await
    }

    async fn get_page_followup(&self, followup_id: u64) -> Result<Value, AppError> {
        debug!("Getting page followup: {}", followup_id);
        self.client
            .get(
                "pagefollowup",
                Some(followup_id),
                Some("Page followup not found"),
            )
            .await
    }

    async fn get_page_followup_fields(&self) -> Result<Vec<String>, AppError> {
        self.schema_fields("pagefollowup").await
    }

    async fn create_page_followup(
        &self,
        signup_page_id: u64,
        url: &str,
        extra: FieldMap,
    ) -> Result<Created, AppError> {
        debug!("Creating page followup for signup page {}", signup_page_id);
        let mut fields = extra;
        fields.insert(
            "page".to_string(),
            Value::from(resource_ref("eventsignuppage", signup_page_id)),
        );
        fields.insert("url".to_string(), Value::from(url));
        self.client
            .post(
                "pagefollowup",
                "Could not create page followup",
                false,
                &fields,
            )
            .await
    }
}
