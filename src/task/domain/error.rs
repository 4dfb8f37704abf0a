//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task gid must not be empty")]
    EmptyTaskGid,

    /// The custom field identifier is empty after trimming.
    #[error("custom field gid must not be empty")]
    EmptyFieldGid,
}

/// Error returned while parsing an impact label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown impact label: {0}")]
pub struct ParseImpactError(pub String);
