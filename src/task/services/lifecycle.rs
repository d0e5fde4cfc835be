//! Service layer for task lifecycle operations.
//!
//! Every operation here is a single request-scoped unit of work: load the
//! task, establish existence, consult the authorization policy, mutate,
//! persist. Existence is checked before authorization uniformly, so a
//! missing task surfaces as not-found and a policy denial as forbidden
//! for every operation alike.

use crate::auth::domain::{Principal, UserId};
use crate::task::{
    domain::{
        NewTaskData, NotificationId, Task, TaskAction, TaskChanges, TaskDescription,
        TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskTitle, permit,
    },
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
};
use crate::user::ports::{UserRepository, UserRepositoryError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: TaskTitle,
    description: TaskDescription,
    due_date: DateTime<Utc>,
    priority: TaskPriority,
    status: TaskStatus,
    assigned_to: Option<UserId>,
}

impl CreateTaskRequest {
    /// Creates a request with required fields; priority defaults to
    /// medium and status to todo.
    #[must_use]
    pub const fn new(
        title: TaskTitle,
        description: TaskDescription,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            description,
            due_date,
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            assigned_to: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Assigns the task to a specific user instead of the creator.
    #[must_use]
    pub const fn with_assigned_to(mut self, assignee: UserId) -> Self {
        self.assigned_to = Some(assignee);
        self
    }
}

/// Request payload for partially updating a task.
///
/// Absent fields retain their prior values; supplying a field never
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<TaskTitle>,
    description: Option<TaskDescription>,
    due_date: Option<DateTime<Utc>>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
    assigned_to: Option<UserId>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            due_date: None,
            priority: None,
            status: None,
            assigned_to: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the status. Owners may set any status, including
    /// reopening a completed task.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Reassigns the task.
    #[must_use]
    pub const fn with_assigned_to(mut self, assignee: UserId) -> Self {
        self.assigned_to = Some(assignee);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The policy denied the operation.
    #[error("not authorized to perform this operation on the task")]
    Forbidden,

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The notification was not found in the task's ledger.
    #[error("notification not found: {0}")]
    NotificationNotFound(NotificationId),

    /// The requested assignee does not exist in the user directory.
    #[error("assignee not found: {0}")]
    AssigneeNotFound(UserId),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// User directory operation failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> TaskLifecycleService<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            clock,
        }
    }

    /// Creates a task on behalf of `principal`.
    ///
    /// The assignee defaults to the caller; an explicit assignee is
    /// resolved against the user directory. Exactly one notification
    /// recording the initial assignment is appended.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::AssigneeNotFound`] when the requested
    /// assignee is unknown, or a repository error when persistence fails.
    pub async fn create(
        &self,
        principal: &Principal,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let assigned_to = match request.assigned_to {
            Some(id) => Some(self.resolve_assignee(id).await?),
            None => None,
        };
        let data = NewTaskData {
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            priority: request.priority,
            status: request.status,
            assigned_to,
        };
        let task = Task::create(principal.clone(), data, &*self.clock);
        self.tasks.insert(&task).await?;
        tracing::info!(task = %task.id(), assignee = %task.assigned_to().id(), "task created");
        Ok(task)
    }

    /// Lists tasks visible to `principal` (creator or assignee), narrowed
    /// by `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn list(
        &self,
        principal: &Principal,
        filter: &TaskFilter,
    ) -> TaskServiceResult<Vec<Task>> {
        Ok(self.tasks.find_visible(principal.id(), filter).await?)
    }

    /// Retrieves a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the id is unknown
    /// and [`TaskServiceError::Forbidden`] when `principal` is neither
    /// creator nor assignee.
    pub async fn get(&self, principal: &Principal, id: TaskId) -> TaskServiceResult<Task> {
        let task = self.load(id).await?;
        if !permit(principal, &task, TaskAction::Read) {
            return Err(TaskServiceError::Forbidden);
        }
        Ok(task)
    }

    /// Partially updates a task. Creator only.
    ///
    /// A reassignment to a different user appends one notification
    /// composed with the updated title; reassignment to the current
    /// assignee appends nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`],
    /// [`TaskServiceError::Forbidden`], or
    /// [`TaskServiceError::AssigneeNotFound`] per the checks above.
    pub async fn update(
        &self,
        principal: &Principal,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let mut task = self.load(id).await?;
        if !permit(principal, &task, TaskAction::Update) {
            return Err(TaskServiceError::Forbidden);
        }
        let assigned_to = match request.assigned_to {
            Some(assignee_id) => Some(self.resolve_assignee(assignee_id).await?),
            None => None,
        };
        let changes = TaskChanges {
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            priority: request.priority,
            status: request.status,
            assigned_to,
        };
        task.apply_update(changes, &*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task, cascading its notification ledger. Creator only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] or
    /// [`TaskServiceError::Forbidden`] per the checks above.
    pub async fn delete(&self, principal: &Principal, id: TaskId) -> TaskServiceResult<()> {
        let task = self.load(id).await?;
        if !permit(principal, &task, TaskAction::Delete) {
            return Err(TaskServiceError::Forbidden);
        }
        self.tasks.delete(id).await?;
        tracing::info!(task = %id, "task deleted");
        Ok(())
    }

    /// Marks a task completed. Assignee only, and only once: a second
    /// call fails because the policy denies completion of an
    /// already-completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] or
    /// [`TaskServiceError::Forbidden`] per the checks above.
    pub async fn mark_complete(&self, principal: &Principal, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.load(id).await?;
        if !permit(principal, &task, TaskAction::MarkComplete) {
            return Err(TaskServiceError::Forbidden);
        }
        task.complete(&*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Flags a single notification as read. Idempotent once set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`],
    /// [`TaskServiceError::Forbidden`], or
    /// [`TaskServiceError::NotificationNotFound`] when the entry is absent
    /// from this task's ledger.
    pub async fn mark_notification_read(
        &self,
        principal: &Principal,
        task_id: TaskId,
        notification_id: NotificationId,
    ) -> TaskServiceResult<Task> {
        let mut task = self.load(task_id).await?;
        if !permit(principal, &task, TaskAction::ReadNotification) {
            return Err(TaskServiceError::Forbidden);
        }
        task.mark_notification_read(notification_id)
            .map_err(|err| match err {
                TaskDomainError::NotificationNotFound(id) => {
                    TaskServiceError::NotificationNotFound(id)
                }
                other => TaskServiceError::Validation(other),
            })?;
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Counts unread notifications across every task visible to
    /// `principal`. Derived on read, never stored; clients poll this.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn unread_count(&self, principal: &Principal) -> TaskServiceResult<usize> {
        let tasks = self
            .tasks
            .find_visible(principal.id(), &TaskFilter::new())
            .await?;
        Ok(tasks.iter().map(Task::unread_notifications).sum())
    }

    /// Loads a task, mapping absence to the service-level not-found.
    async fn load(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    /// Resolves an assignee id to a full principal via the directory.
    async fn resolve_assignee(&self, id: UserId) -> TaskServiceResult<Principal> {
        let profile = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::AssigneeNotFound(id))?;
        Ok(profile.into_principal())
    }
}
