//! Error types for task domain validation and parsing.

use super::NotificationId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is shorter than the minimum after trimming.
    #[error("task title must be at least {minimum} characters")]
    TitleTooShort {
        /// Minimum accepted length.
        minimum: usize,
    },

    /// The description is shorter than the minimum after trimming.
    #[error("task description must be at least {minimum} characters")]
    DescriptionTooShort {
        /// Minimum accepted length.
        minimum: usize,
    },

    /// The referenced notification is not in this task's ledger.
    #[error("notification not found: {0}")]
    NotificationNotFound(NotificationId),
}

/// Error returned while parsing task statuses from the wire or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing task priorities from the wire or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
