//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing task identifiers from their string form.
#[derive(Debug, Error)]
#[error("invalid task id: {0}")]
pub struct ParseTaskIdError(#[from] uuid::Error);
