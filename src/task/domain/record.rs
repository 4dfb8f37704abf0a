//! Raw task records and custom field values as delivered by the tracker.
//!
//! The tracker does not guarantee field presence or type stability across
//! tasks, so records keep the loosely typed JSON payload and only the
//! extraction functions in [`super::extract`] interpret it.

use super::FieldGid;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Key holding the task identifier.
const GID_KEY: &str = "gid";
/// Key holding the task display name.
const NAME_KEY: &str = "name";
/// Key holding the list of custom field entries.
const CUSTOM_FIELDS_KEY: &str = "custom_fields";

/// A task as fetched from the tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRecord(Map<String, Value>);

impl TaskRecord {
    /// Wraps a raw JSON object.
    #[must_use]
    pub const fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps an arbitrary JSON value.
    ///
    /// Anything other than an object yields an empty record.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    /// Returns the task identifier, or an empty string when absent.
    #[must_use]
    pub fn gid(&self) -> &str {
        self.builtin_str(GID_KEY).unwrap_or_default()
    }

    /// Returns the display name, or an empty string when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.builtin_str(NAME_KEY).unwrap_or_default()
    }

    /// Looks up a built-in (non-custom) field by name.
    #[must_use]
    pub fn builtin(&self, field_name: &str) -> Option<&Value> {
        self.0.get(field_name)
    }

    fn builtin_str(&self, field_name: &str) -> Option<&str> {
        self.builtin(field_name).and_then(Value::as_str)
    }

    /// Indexes the record's custom fields by identifier.
    #[must_use]
    pub fn custom_fields(&self) -> CustomFields {
        self.builtin(CUSTOM_FIELDS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .map(CustomFields::from_raw_entries)
            .unwrap_or_default()
    }
}

/// Typed payload of a single custom field.
///
/// Exactly one variant applies per field; the payload inside it may still be
/// null.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomFieldValue {
    /// Boolean field.
    Boolean(Option<bool>),
    /// Date field holding the raw calendar date string.
    Date(Option<String>),
    /// Enumerated field holding the selected option label.
    Enum(Option<String>),
    /// Numeric field.
    Number(Option<f64>),
    /// Any field subtype outside the four supported ones.
    Unsupported,
}

impl CustomFieldValue {
    /// Interprets one raw custom field entry.
    ///
    /// The subtype comes from `resource_subtype`, then `type`; without either
    /// tag it is inferred from which payload key is present.
    #[must_use]
    pub fn from_raw(entry: &Map<String, Value>) -> Self {
        let tag = entry
            .get("resource_subtype")
            .and_then(Value::as_str)
            .or_else(|| entry.get("type").and_then(Value::as_str));

        match tag {
            Some("enum") => Self::enum_from(entry),
            Some("number") => Self::number_from(entry),
            Some("date") => Self::date_from(entry),
            Some("boolean" | "checkbox") => Self::boolean_from(entry),
            Some(_) => Self::Unsupported,
            None => Self::infer_from_payload(entry),
        }
    }

    fn infer_from_payload(entry: &Map<String, Value>) -> Self {
        if entry.contains_key("enum_value") {
            Self::enum_from(entry)
        } else if entry.contains_key("number_value") {
            Self::number_from(entry)
        } else if entry.contains_key("date_value") {
            Self::date_from(entry)
        } else if entry.contains_key("boolean_value") {
            Self::boolean_from(entry)
        } else {
            Self::Unsupported
        }
    }

    fn enum_from(entry: &Map<String, Value>) -> Self {
        let label = entry
            .get("enum_value")
            .and_then(|option| option.get("name"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self::Enum(label)
    }

    fn number_from(entry: &Map<String, Value>) -> Self {
        Self::Number(entry.get("number_value").and_then(Value::as_f64))
    }

    fn date_from(entry: &Map<String, Value>) -> Self {
        let date = entry
            .get("date_value")
            .and_then(|value| value.get("date"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self::Date(date)
    }

    fn boolean_from(entry: &Map<String, Value>) -> Self {
        Self::Boolean(entry.get("boolean_value").and_then(Value::as_bool))
    }
}

/// Custom field values of one task, keyed by field identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFields(HashMap<FieldGid, CustomFieldValue>);

impl CustomFields {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the collection from the raw `custom_fields` array.
    ///
    /// Entries without a usable `gid` are ignored. A repeated identifier keeps
    /// the last entry.
    #[must_use]
    pub fn from_raw_entries(entries: &[Value]) -> Self {
        let values = entries
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|entry| {
                let gid = entry.get("gid").and_then(Value::as_str)?;
                let field = FieldGid::new(gid).ok()?;
                Some((field, CustomFieldValue::from_raw(entry)))
            })
            .collect();
        Self(values)
    }

    /// Sets the value of a field, replacing any previous value.
    #[must_use]
    pub fn with(mut self, field: FieldGid, value: CustomFieldValue) -> Self {
        self.0.insert(field, value);
        self
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, field: &FieldGid) -> Option<&CustomFieldValue> {
        self.0.get(field)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
