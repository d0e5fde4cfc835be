//! Repository port for task persistence and filtered listing.

use crate::auth::domain::UserId;
use crate::task::domain::{Task, TaskId, TaskPriority, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Scope selector for assignee/creator filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalScope {
    /// The requesting principal.
    Me,
    /// A specific user.
    User(UserId),
}

impl PrincipalScope {
    /// Resolves the scope to a concrete user id for `requester`.
    #[must_use]
    pub const fn resolve(self, requester: UserId) -> UserId {
        match self {
            Self::Me => requester,
            Self::User(id) => id,
        }
    }
}

/// Filter criteria narrowing a task listing.
///
/// This is the whole of the repository adapter's job: translating these
/// criteria into a storage query. No business logic lives here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    search: Option<String>,
    due_before: Option<DateTime<Utc>>,
    assigned_to: Option<PrincipalScope>,
    created_by: Option<PrincipalScope>,
}

impl TaskFilter {
    /// Creates an empty filter matching every visible task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            priority: None,
            search: None,
            due_before: None,
            assigned_to: None,
            created_by: None,
        }
    }

    /// Restricts to a workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to a priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts to tasks whose title or description contains the given
    /// text (case-insensitive substring).
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restricts to tasks due on or before the given instant.
    #[must_use]
    pub const fn with_due_before(mut self, due_before: DateTime<Utc>) -> Self {
        self.due_before = Some(due_before);
        self
    }

    /// Restricts to tasks assigned within the given scope.
    #[must_use]
    pub const fn with_assigned_to(mut self, scope: PrincipalScope) -> Self {
        self.assigned_to = Some(scope);
        self
    }

    /// Restricts to tasks created within the given scope.
    #[must_use]
    pub const fn with_created_by(mut self, scope: PrincipalScope) -> Self {
        self.created_by = Some(scope);
        self
    }

    /// Returns the status criterion.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority criterion.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the free-text search criterion.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the due-date upper bound.
    #[must_use]
    pub const fn due_before(&self) -> Option<DateTime<Utc>> {
        self.due_before
    }

    /// Returns the assignee scope criterion.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<PrincipalScope> {
        self.assigned_to
    }

    /// Returns the creator scope criterion.
    #[must_use]
    pub const fn created_by(&self) -> Option<PrincipalScope> {
        self.created_by
    }
}

/// Task persistence contract.
///
/// Notifications are embedded in the task document, so every operation
/// here mutates the ledger atomically with its parent. Concurrent writes
/// resolve last-write-wins; no version token is carried.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Duplicate`] when the task ID already
    /// exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (fields, status, ledger).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task, cascading its embedded notification ledger.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns tasks visible to `requester` (creator or assignee),
    /// narrowed by `filter`, newest first by creation timestamp.
    async fn find_visible(
        &self,
        requester: UserId,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    Duplicate(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
