//! Planning of field writes from fetched task records.

use crate::config::FieldConfig;
use crate::task::domain::{
    FieldValue, OrderCandidate, OrderOutcome, TaskGid, TaskRecord, UpdateDirective,
    compute_order, compute_urgency,
    extract::{
        extract_boolean, extract_custom_date, extract_date, extract_enum_label, extract_number,
    },
};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Built-in field flagging completed tasks.
const COMPLETED_FIELD: &str = "completed";
/// Built-in field holding the due date.
const DUE_ON_FIELD: &str = "due_on";
/// Size label marking placeholder tasks that are never scored.
pub const HOLDER_SIZE: &str = "Holder";

/// Plans one urgency write per open, non-placeholder task.
///
/// Completed tasks and tasks sized [`HOLDER_SIZE`] are skipped without a
/// directive.
#[must_use]
pub fn plan_urgency(
    tasks: &[TaskRecord],
    fields: &FieldConfig,
    today: NaiveDate,
) -> Vec<UpdateDirective> {
    tasks
        .iter()
        .filter_map(|task| plan_task_urgency(task, fields, today))
        .collect()
}

/// Plans the urgency write for a single task.
///
/// Returns `None` for completed tasks, tasks sized [`HOLDER_SIZE`] and
/// records without a gid.
#[must_use]
pub fn plan_task_urgency(
    task: &TaskRecord,
    fields: &FieldConfig,
    today: NaiveDate,
) -> Option<UpdateDirective> {
    let custom = task.custom_fields();
    let completed = extract_boolean(task, COMPLETED_FIELD);
    let due_on = extract_date(task, DUE_ON_FIELD);
    let opened_on = extract_custom_date(&custom, &fields.open_date);
    let impact = extract_enum_label(&custom, &fields.impact);
    let size = extract_enum_label(&custom, &fields.size);

    if completed || size == Some(HOLDER_SIZE) {
        return None;
    }

    let gid = task_gid(task)?;
    let urgency = compute_urgency(due_on, opened_on, impact, today);
    info!(task = task.name(), urgency, "computed urgency");

    Some(UpdateDirective::new(
        gid,
        task.name().to_owned(),
        fields.urgency.clone(),
        FieldValue::Number(urgency),
    ))
}

/// Orders the tasks of a section by their current order field.
#[must_use]
pub fn plan_order(tasks: &[TaskRecord], fields: &FieldConfig) -> Vec<OrderOutcome> {
    let candidates = tasks
        .iter()
        .filter_map(|task| {
            let gid = task_gid(task)?;
            let current = extract_number(&task.custom_fields(), &fields.order);
            Some(OrderCandidate::new(gid, task.name(), current))
        })
        .collect();
    compute_order(candidates)
}

fn task_gid(task: &TaskRecord) -> Option<TaskGid> {
    let gid = TaskGid::new(task.gid()).ok();
    if gid.is_none() {
        warn!(task = task.name(), "task record has no gid; skipping");
    }
    gid
}
