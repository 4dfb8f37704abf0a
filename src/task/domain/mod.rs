//! Domain model for task urgency and ordering.
//!
//! The domain turns loosely typed tracker records into typed values, scores
//! them and decides on section ordering. Everything here is pure: the
//! current date is always passed in and no infrastructure is touched.

pub mod calendar;
mod directive;
mod error;
pub mod extract;
mod ids;
mod ordering;
mod record;
mod urgency;

pub use directive::{FieldValue, UpdateDirective};
pub use error::{ParseImpactError, TaskDomainError};
pub use ids::{FieldGid, TaskGid};
pub use ordering::{ORDER_STEP, OrderCandidate, OrderOutcome, compute_order};
pub use record::{CustomFieldValue, CustomFields, TaskRecord};
pub use urgency::{Impact, compute_urgency, due_date_multiplier, open_weeks_bonus};
