//! Application services for urgency and ordering updates.

pub mod planner;
pub mod runner;
mod updater;

pub use planner::{HOLDER_SIZE, plan_order, plan_task_urgency, plan_urgency};
pub use runner::{ApplyReport, ErrorPolicy, WriteFailure, apply_directive, apply_directives};
pub use updater::{TaskUpdateError, TaskUpdateResult, TaskUpdateService};
