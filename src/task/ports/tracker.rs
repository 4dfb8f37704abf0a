//! Tracker port for reading task records and writing custom field values.

use crate::task::domain::{FieldGid, FieldValue, TaskGid, TaskRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Access to the external task tracker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskTracker: Send + Sync {
    /// Fetches the incomplete tasks of a project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when any page cannot be retrieved.
    async fn project_tasks(&self, project: &str) -> TrackerResult<Vec<TaskRecord>>;

    /// Fetches a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the task cannot be retrieved.
    async fn task(&self, task: &TaskGid) -> TrackerResult<TaskRecord>;

    /// Fetches the tasks of a section.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when any page cannot be retrieved.
    async fn section_tasks(&self, section: &str) -> TrackerResult<Vec<TaskRecord>>;

    /// Writes one custom field value on a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the tracker rejects or fails the write.
    async fn update_custom_field(
        &self,
        task: &TaskGid,
        field: &FieldGid,
        value: FieldValue,
    ) -> TrackerResult<()>;
}

/// Errors returned by tracker implementations.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// The remote call failed: authentication, rate limiting, transport or
    /// any error status reported by the service.
    #[error("service error{}: {message}", status_suffix(.status))]
    Service {
        /// HTTP status, when the service answered at all.
        status: Option<u16>,
        /// Error detail reported by the service or transport.
        message: String,
    },

    /// Any other failure, such as an undecodable response.
    #[error("unknown error: {0}")]
    Unknown(Arc<dyn std::error::Error + Send + Sync>),
}

impl TrackerError {
    /// Creates a service error.
    pub fn service(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    /// Wraps an unexpected error.
    pub fn unknown(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unknown(Arc::new(err))
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({code})")).unwrap_or_default()
}
