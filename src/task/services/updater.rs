//! Service layer running the urgency and ordering pipelines.

use super::{
    planner::{plan_order, plan_task_urgency},
    runner::{ApplyReport, ErrorPolicy, apply_directive, apply_directives},
};
use crate::config::FieldConfig;
use crate::task::{
    domain::{TaskGid, TaskRecord},
    ports::{TaskTracker, TrackerError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Service-level errors for the update pipelines.
#[derive(Debug, Error)]
pub enum TaskUpdateError {
    /// Fetching the tasks to process failed; nothing was written.
    #[error("failed to fetch tasks: {0}")]
    Fetch(#[source] TrackerError),
}

/// Result type for update pipelines.
pub type TaskUpdateResult<T> = Result<T, TaskUpdateError>;

/// Runs the urgency and ordering pipelines against a tracker.
///
/// Urgency writes continue past individual failures; ordering writes stop at
/// the first failure.
#[derive(Clone)]
pub struct TaskUpdateService<T, C>
where
    T: TaskTracker,
    C: Clock + Send + Sync,
{
    tracker: Arc<T>,
    clock: Arc<C>,
    fields: FieldConfig,
}

impl<T, C> TaskUpdateService<T, C>
where
    T: TaskTracker,
    C: Clock + Send + Sync,
{
    /// Creates a new update service.
    #[must_use]
    pub const fn new(tracker: Arc<T>, clock: Arc<C>, fields: FieldConfig) -> Self {
        Self {
            tracker,
            clock,
            fields,
        }
    }

    /// Returns the field configuration in use.
    #[must_use]
    pub const fn fields(&self) -> &FieldConfig {
        &self.fields
    }

    /// Recomputes urgency for every incomplete task of a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUpdateError::Fetch`] when the project tasks cannot be
    /// retrieved.
    pub async fn update_project_urgency(&self, project: &str) -> TaskUpdateResult<ApplyReport> {
        let tasks = self
            .tracker
            .project_tasks(project)
            .await
            .map_err(|err| fetch_failed("project tasks", err))?;
        Ok(self.assign_urgency(&tasks).await)
    }

    /// Recomputes urgency for the listed tasks.
    ///
    /// All tasks are fetched before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUpdateError::Fetch`] when any task cannot be retrieved.
    pub async fn update_task_urgency(&self, task_gids: &[TaskGid]) -> TaskUpdateResult<ApplyReport> {
        let mut tasks = Vec::with_capacity(task_gids.len());
        for gid in task_gids {
            let task = self
                .tracker
                .task(gid)
                .await
                .map_err(|err| fetch_failed("specific tasks", err))?;
            tasks.push(task);
        }
        Ok(self.assign_urgency(&tasks).await)
    }

    /// Renumbers the ordered tasks of a section.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUpdateError::Fetch`] when the section tasks cannot be
    /// retrieved.
    pub async fn reorder_section(&self, section: &str) -> TaskUpdateResult<ApplyReport> {
        let tasks = self
            .tracker
            .section_tasks(section)
            .await
            .map_err(|err| fetch_failed("section tasks", err))?;

        let directives = plan_order(&tasks, &self.fields)
            .iter()
            .filter_map(|outcome| {
                let directive = outcome.directive(&self.fields.order);
                if directive.is_none() {
                    info!(task = outcome.name(), "not ordering");
                }
                directive
            })
            .collect();
        Ok(apply_directives(&*self.tracker, directives, ErrorPolicy::AbortOnError).await)
    }

    /// Scores and writes one task at a time.
    async fn assign_urgency(&self, tasks: &[TaskRecord]) -> ApplyReport {
        let today = self.today();
        let mut report = ApplyReport::default();
        for task in tasks {
            let Some(directive) = plan_task_urgency(task, &self.fields, today) else {
                continue;
            };
            let flow = apply_directive(
                &*self.tracker,
                &directive,
                ErrorPolicy::ContinueOnError,
                &mut report,
            )
            .await;
            if flow.is_break() {
                break;
            }
        }
        report
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

fn fetch_failed(what: &str, err: TrackerError) -> TaskUpdateError {
    error!(error = %err, "error getting {what}");
    TaskUpdateError::Fetch(err)
}
