//! Sequential application of update directives.

use crate::task::{
    domain::{TaskGid, UpdateDirective},
    ports::{TaskTracker, TrackerError},
};
use std::ops::ControlFlow;
use tracing::{error, info, warn};

/// What to do with the remaining directives after a write fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Report the failure and attempt the next directive.
    ContinueOnError,
    /// Report the failure and stop the run.
    AbortOnError,
}

/// A directive whose write failed.
#[derive(Debug, Clone)]
pub struct WriteFailure {
    /// Task the write targeted.
    pub task: TaskGid,
    /// Display name of the task.
    pub task_name: String,
    /// Error reported by the tracker.
    pub error: TrackerError,
}

/// Outcome of applying a batch of directives.
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    written: usize,
    failures: Vec<WriteFailure>,
    aborted: bool,
}

impl ApplyReport {
    /// Returns the number of successful writes.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Returns the failed writes in the order they happened.
    #[must_use]
    pub fn failures(&self) -> &[WriteFailure] {
        &self.failures
    }

    /// Returns whether a failed write stopped the run.
    #[must_use]
    pub const fn aborted(&self) -> bool {
        self.aborted
    }

    /// Returns whether every directive was written.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && !self.aborted
    }
}

/// Writes each directive in order, handling failures according to `policy`.
pub async fn apply_directives<T>(
    tracker: &T,
    directives: Vec<UpdateDirective>,
    policy: ErrorPolicy,
) -> ApplyReport
where
    T: TaskTracker + ?Sized,
{
    let mut report = ApplyReport::default();
    for directive in directives {
        if apply_directive(tracker, &directive, policy, &mut report)
            .await
            .is_break()
        {
            break;
        }
    }
    report
}

/// Writes a single directive and records the outcome in `report`.
///
/// Returns [`ControlFlow::Break`] when the write failed under
/// [`ErrorPolicy::AbortOnError`]; the report is then marked aborted.
pub async fn apply_directive<T>(
    tracker: &T,
    directive: &UpdateDirective,
    policy: ErrorPolicy,
    report: &mut ApplyReport,
) -> ControlFlow<()>
where
    T: TaskTracker + ?Sized,
{
    let result = tracker
        .update_custom_field(directive.task(), directive.field(), directive.value())
        .await;
    let Err(err) = result else {
        info!(
            task = directive.task_name(),
            field = %directive.field(),
            value = %directive.value(),
            "updated task"
        );
        report.written = report.written.saturating_add(1);
        return ControlFlow::Continue(());
    };

    let stop = policy == ErrorPolicy::AbortOnError;
    if stop {
        error!(
            task = directive.task_name(),
            value = %directive.value(),
            error = %err,
            "write failed; aborting run"
        );
    } else {
        warn!(
            task = directive.task_name(),
            value = %directive.value(),
            error = %err,
            "write failed"
        );
    }
    report.failures.push(WriteFailure {
        task: directive.task().clone(),
        task_name: directive.task_name().to_owned(),
        error: err,
    });
    if stop {
        report.aborted = true;
        return ControlFlow::Break(());
    }
    ControlFlow::Continue(())
}
