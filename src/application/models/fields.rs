use crate::constants::REST_BASE_PATH;
use serde_json::Value;

/// An open, ordered mapping from field name to JSON value
///
/// ActionKit schemas are defined server-side, so no field validation
/// happens client-side; whatever the caller puts here is submitted as-is.
pub type FieldMap = serde_json::Map<String, Value>;

/// Outcome of a create POST
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    /// URL of the newly created resource, from the `Location` header
    Location(String),
    /// Full JSON body of the response, when one was requested and returned
    Body(Value),
    /// The response carried no parseable JSON body
    Empty,
}

impl Created {
    /// Returns the created resource URL, if the server sent one
    pub fn location(&self) -> Option<&str> {
        match self {
            Created::Location(url) => Some(url),
            _ => None,
        }
    }

    /// Returns the response body, if the server sent one
    pub fn body(&self) -> Option<&Value> {
        match self {
            Created::Body(body) => Some(body),
            _ => None,
        }
    }
}

/// Builds the relative reference path for a resource entity
///
/// Child resources link to their parent by path rather than by bare id,
/// e.g. `/rest/v1/campaign/42/`.
pub fn resource_ref(resource: &str, entity_id: u64) -> String {
    format!("{REST_BASE_PATH}/{resource}/{entity_id}/")
}

/// Extracts the field names from a `{resource}/schema` response
pub fn schema_field_names(schema: &Value) -> Vec<String> {
    schema
        .get("fields")
        .and_then(Value::as_object)
        .map(|fields| fields.keys().cloned().collect())
        .unwrap_or_default()
}
