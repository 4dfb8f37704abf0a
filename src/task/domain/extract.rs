//! Fail-soft extraction of typed values from task records.
//!
//! Every function here is total: missing, null, mistyped or malformed data
//! collapses to `false` or `None` and never surfaces as an error.

use super::{CustomFieldValue, CustomFields, FieldGid, TaskRecord, calendar::parse_iso_date};
use chrono::NaiveDate;
use serde_json::Value;

/// Reads a built-in field as a boolean.
///
/// Absent and null fields are `false`; other values follow JSON truthiness
/// (non-zero numbers, non-empty strings, arrays and objects are `true`).
#[must_use]
pub fn extract_boolean(record: &TaskRecord, field_name: &str) -> bool {
    record.builtin(field_name).is_some_and(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

/// Reads a built-in field as an ISO-8601 calendar date.
#[must_use]
pub fn extract_date(record: &TaskRecord, field_name: &str) -> Option<NaiveDate> {
    record
        .builtin(field_name)
        .and_then(Value::as_str)
        .and_then(parse_iso_date)
}

/// Reads the selected option label of an enumerated custom field.
///
/// A field whose selection is null resolves to `None` exactly like a field
/// that is not present at all.
#[must_use]
pub fn extract_enum_label<'a>(fields: &'a CustomFields, field: &FieldGid) -> Option<&'a str> {
    match fields.get(field) {
        Some(CustomFieldValue::Enum(label)) => label.as_deref(),
        _ => None,
    }
}

/// Reads the payload of a numeric custom field.
#[must_use]
pub fn extract_number(fields: &CustomFields, field: &FieldGid) -> Option<f64> {
    match fields.get(field) {
        Some(CustomFieldValue::Number(number)) => *number,
        _ => None,
    }
}

/// Reads a date custom field as an ISO-8601 calendar date.
#[must_use]
pub fn extract_custom_date(fields: &CustomFields, field: &FieldGid) -> Option<NaiveDate> {
    match fields.get(field) {
        Some(CustomFieldValue::Date(raw)) => raw.as_deref().and_then(parse_iso_date),
        _ => None,
    }
}
