//! In-memory tracker for pipeline tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{FieldGid, FieldValue, TaskGid, TaskRecord},
    ports::{TaskTracker, TrackerError, TrackerResult},
};

/// A write recorded by [`InMemoryTaskTracker`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWrite {
    /// Task that was written.
    pub task: TaskGid,
    /// Field that was written.
    pub field: FieldGid,
    /// Value that was written.
    pub value: FieldValue,
}

/// Thread-safe in-memory tracker with injectable failures.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskTracker {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    tasks: Vec<TaskRecord>,
    projects: HashMap<String, Vec<String>>,
    sections: HashMap<String, Vec<String>>,
    failing_writes: HashSet<String>,
    failing_fetches: bool,
    writes: Vec<RecordedWrite>,
}

impl InMemoryTaskTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task to a project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unknown`] when the state lock is poisoned.
    pub fn add_project_task(&self, project: &str, task: TaskRecord) -> TrackerResult<()> {
        self.with_state(|state| {
            state
                .projects
                .entry(project.to_owned())
                .or_default()
                .push(task.gid().to_owned());
            state.tasks.push(task);
        })
    }

    /// Adds a task to a section, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unknown`] when the state lock is poisoned.
    pub fn add_section_task(&self, section: &str, task: TaskRecord) -> TrackerResult<()> {
        self.with_state(|state| {
            state
                .sections
                .entry(section.to_owned())
                .or_default()
                .push(task.gid().to_owned());
            state.tasks.push(task);
        })
    }

    /// Makes every write to the given task fail with a service error.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unknown`] when the state lock is poisoned.
    pub fn fail_writes_for(&self, task: &str) -> TrackerResult<()> {
        self.with_state(|state| {
            state.failing_writes.insert(task.to_owned());
        })
    }

    /// Makes every fetch fail with a service error.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unknown`] when the state lock is poisoned.
    pub fn fail_fetches(&self) -> TrackerResult<()> {
        self.with_state(|state| state.failing_fetches = true)
    }

    /// Returns the successful writes in the order they happened.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unknown`] when the state lock is poisoned.
    pub fn writes(&self) -> TrackerResult<Vec<RecordedWrite>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.writes.clone())
    }

    fn with_state(&self, apply: impl FnOnce(&mut InMemoryTrackerState)) -> TrackerResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        apply(&mut state);
        Ok(())
    }

    fn tasks_for(&self, gids: Option<&[String]>) -> TrackerResult<Vec<TaskRecord>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        if state.failing_fetches {
            return Err(fetch_refused());
        }
        let tasks = gids
            .into_iter()
            .flatten()
            .filter_map(|gid| state.tasks.iter().find(|task| task.gid() == gid.as_str()))
            .cloned()
            .collect();
        Ok(tasks)
    }
}

fn lock_error<E: std::fmt::Display>(err: &E) -> TrackerError {
    TrackerError::unknown(std::io::Error::other(err.to_string()))
}

fn fetch_refused() -> TrackerError {
    TrackerError::service(Some(503), "fetch refused by in-memory tracker")
}

#[async_trait]
impl TaskTracker for InMemoryTaskTracker {
    async fn project_tasks(&self, project: &str) -> TrackerResult<Vec<TaskRecord>> {
        let gids = {
            let state = self.state.read().map_err(|err| lock_error(&err))?;
            state.projects.get(project).cloned()
        };
        let tasks = self.tasks_for(gids.as_deref())?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.builtin("completed") != Some(&Value::Bool(true)))
            .collect())
    }

    async fn task(&self, task: &TaskGid) -> TrackerResult<TaskRecord> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        if state.failing_fetches {
            return Err(fetch_refused());
        }
        state
            .tasks
            .iter()
            .find(|record| record.gid() == task.as_str())
            .cloned()
            .ok_or_else(|| TrackerError::service(Some(404), format!("task not found: {task}")))
    }

    async fn section_tasks(&self, section: &str) -> TrackerResult<Vec<TaskRecord>> {
        let gids = {
            let state = self.state.read().map_err(|err| lock_error(&err))?;
            state.sections.get(section).cloned()
        };
        self.tasks_for(gids.as_deref())
    }

    async fn update_custom_field(
        &self,
        task: &TaskGid,
        field: &FieldGid,
        value: FieldValue,
    ) -> TrackerResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.failing_writes.contains(task.as_str()) {
            return Err(TrackerError::service(
                Some(500),
                format!("write refused for task {task}"),
            ));
        }
        state.writes.push(RecordedWrite {
            task: task.clone(),
            field: field.clone(),
            value,
        });
        Ok(())
    }
}
