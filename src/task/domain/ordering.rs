//! Deterministic ordering of tasks within a section.

use super::{FieldGid, FieldValue, TaskGid, UpdateDirective};
use std::cmp::Ordering;

/// Spacing between consecutive order keys.
pub const ORDER_STEP: u64 = 10;

/// A task taking part in ordering, with its current order key.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCandidate {
    gid: TaskGid,
    name: String,
    current: Option<f64>,
}

impl OrderCandidate {
    /// Creates a candidate.
    #[must_use]
    pub fn new(gid: TaskGid, name: impl Into<String>, current: Option<f64>) -> Self {
        Self {
            gid,
            name: name.into(),
            current,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn gid(&self) -> &TaskGid {
        &self.gid
    }

    /// Returns the task display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the order key the task currently carries.
    #[must_use]
    pub const fn current(&self) -> Option<f64> {
        self.current
    }
}

/// Result of ordering one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderOutcome {
    gid: TaskGid,
    name: String,
    assigned: Option<u64>,
}

impl OrderOutcome {
    /// Returns the task identifier.
    #[must_use]
    pub const fn gid(&self) -> &TaskGid {
        &self.gid
    }

    /// Returns the task display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the new order key, or `None` when the task is left unordered.
    #[must_use]
    pub const fn assigned(&self) -> Option<u64> {
        self.assigned
    }

    /// Converts an assigned outcome into a write of the order field.
    #[must_use]
    pub fn directive(&self, order_field: &FieldGid) -> Option<UpdateDirective> {
        self.assigned.map(|key| {
            UpdateDirective::new(
                self.gid.clone(),
                self.name.clone(),
                order_field.clone(),
                FieldValue::Integer(key),
            )
        })
    }
}

/// Assigns evenly spaced order keys to the candidates.
///
/// Candidates are stably sorted so that keyed tasks come first by ascending
/// key and unkeyed tasks keep their input order at the end. Walking that
/// sequence, a counter advances by [`ORDER_STEP`] for every task; keyed
/// tasks receive the counter value, unkeyed tasks receive nothing but still
/// consume a step.
#[must_use]
pub fn compute_order(candidates: Vec<OrderCandidate>) -> Vec<OrderOutcome> {
    let mut sorted = candidates;
    sorted.sort_by(compare_keys);

    let mut counter: u64 = 0;
    sorted
        .into_iter()
        .map(|candidate| {
            counter = counter.saturating_add(ORDER_STEP);
            let key = counter;
            OrderOutcome {
                assigned: candidate.current.map(|_| key),
                gid: candidate.gid,
                name: candidate.name,
            }
        })
        .collect()
}

fn compare_keys(left: &OrderCandidate, right: &OrderCandidate) -> Ordering {
    match (left.current, right.current) {
        (Some(l), Some(r)) => l.total_cmp(&r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
