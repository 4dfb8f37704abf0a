//! Wire types for the Asana REST API.

use crate::task::domain::TaskRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Single-resource response envelope.
#[derive(Debug, Deserialize)]
pub(super) struct DataEnvelope<T> {
    pub data: T,
}

/// Paginated collection response envelope.
#[derive(Debug, Deserialize)]
pub(super) struct PageEnvelope {
    pub data: Vec<TaskRecord>,
    #[serde(default)]
    pub next_page: Option<NextPage>,
}

/// Pointer to the following page.
#[derive(Debug, Deserialize)]
pub(super) struct NextPage {
    pub offset: String,
}

/// Error response body.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorDetail {
    pub message: String,
}

impl ErrorEnvelope {
    /// Joins the reported error messages, or returns `None` if there are none.
    pub fn summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        let messages: Vec<&str> = self
            .errors
            .iter()
            .map(|detail| detail.message.as_str())
            .collect();
        Some(messages.join("; "))
    }
}

/// Body of a task update writing custom field values.
#[derive(Debug, Serialize)]
pub(super) struct UpdateTaskRequest {
    pub data: UpdateTaskData,
}

#[derive(Debug, Serialize)]
pub(super) struct UpdateTaskData {
    pub custom_fields: Map<String, Value>,
}

impl UpdateTaskRequest {
    /// Builds a request writing one custom field.
    pub fn single_field(field: &str, value: Value) -> Self {
        let mut custom_fields = Map::new();
        custom_fields.insert(field.to_owned(), value);
        Self {
            data: UpdateTaskData { custom_fields },
        }
    }
}
