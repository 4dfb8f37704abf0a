//! Field writes requested from the tracker.

use super::{FieldGid, TaskGid};
use serde_json::{Number, Value};
use std::fmt;

/// New value for a custom field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// A fractional number, used for urgency scores.
    Number(f64),
    /// A whole number, used for order keys.
    Integer(u64),
}

impl FieldValue {
    /// Renders the value as JSON.
    ///
    /// Non-finite numbers have no JSON form and render as `null`.
    #[must_use]
    pub fn to_json(self) -> Value {
        match self {
            Self::Number(number) => Number::from_f64(number).map_or(Value::Null, Value::Number),
            Self::Integer(integer) => Value::from(integer),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Integer(integer) => write!(f, "{integer}"),
        }
    }
}

/// One write of a custom field on a task.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDirective {
    task: TaskGid,
    task_name: String,
    field: FieldGid,
    value: FieldValue,
}

impl UpdateDirective {
    /// Creates a directive.
    #[must_use]
    pub const fn new(task: TaskGid, task_name: String, field: FieldGid, value: FieldValue) -> Self {
        Self {
            task,
            task_name,
            field,
            value,
        }
    }

    /// Returns the task to update.
    #[must_use]
    pub const fn task(&self) -> &TaskGid {
        &self.task
    }

    /// Returns the display name of the task, used for reporting.
    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Returns the field to write.
    #[must_use]
    pub const fn field(&self) -> &FieldGid {
        &self.field
    }

    /// Returns the value to write.
    #[must_use]
    pub const fn value(&self) -> FieldValue {
        self.value
    }
}
