//! Shared fixtures for in-memory pipeline tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::{Value, json};
use todo_updater::{
    config::FieldConfig,
    task::{adapters::memory::InMemoryTaskTracker, domain::TaskRecord, services::TaskUpdateService},
};

/// Service type used by the in-memory tests.
pub type TestService = TaskUpdateService<InMemoryTaskTracker, DefaultClock>;

/// Field identifiers used throughout the in-memory tests.
#[fixture]
pub fn fields() -> FieldConfig {
    FieldConfig::from_raw("opened", "impact", "size", "urgency", "order")
        .expect("valid field configuration")
}

/// Builds a service around a shared tracker.
pub fn service(tracker: &InMemoryTaskTracker, fields: FieldConfig) -> TestService {
    TaskUpdateService::new(Arc::new(tracker.clone()), Arc::new(DefaultClock), fields)
}

/// An enum custom field entry.
pub fn enum_field(gid: &str, label: Option<&str>) -> Value {
    json!({
        "gid": gid,
        "resource_subtype": "enum",
        "enum_value": label.map(|name| json!({"gid": format!("{gid}-{name}"), "name": name}))
    })
}

/// A number custom field entry.
pub fn number_field(gid: &str, value: Option<f64>) -> Value {
    json!({"gid": gid, "resource_subtype": "number", "number_value": value})
}

/// A task record with the given custom fields and no dates.
pub fn task(gid: &str, name: &str, completed: bool, custom_fields: Vec<Value>) -> TaskRecord {
    TaskRecord::from_value(json!({
        "gid": gid,
        "name": name,
        "completed": completed,
        "due_on": null,
        "start_on": null,
        "custom_fields": custom_fields
    }))
}
