//! Task aggregate root and related lifecycle types.

use super::{
    Notification, NotificationId, ParsePriorityError, ParseStatusError, TaskDescription,
    TaskDomainError, TaskId, TaskTitle,
};
use crate::auth::domain::Principal;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "todo")]
    Todo,
    /// Work is underway.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl TaskPriority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Validated inputs for constructing a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Task title.
    pub title: TaskTitle,
    /// Task description.
    pub description: TaskDescription,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Priority; defaults to medium when unspecified at the boundary.
    pub priority: TaskPriority,
    /// Initial status; defaults to todo when unspecified at the boundary.
    pub status: TaskStatus,
    /// Assignee; the creator when `None`.
    pub assigned_to: Option<Principal>,
}

/// Partial update to an existing task.
///
/// `None` means "retain the current value", never "clear". The assignee
/// is pre-resolved to a full principal by the service layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title, if supplied.
    pub title: Option<TaskTitle>,
    /// Replacement description, if supplied.
    pub description: Option<TaskDescription>,
    /// Replacement due date, if supplied.
    pub due_date: Option<DateTime<Utc>>,
    /// Replacement priority, if supplied.
    pub priority: Option<TaskPriority>,
    /// Replacement status, if supplied.
    pub status: Option<TaskStatus>,
    /// Replacement assignee, if supplied.
    pub assigned_to: Option<Principal>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted creator reference.
    pub created_by: Principal,
    /// Persisted assignee reference.
    pub assigned_to: Principal,
    /// Persisted notification ledger, in insertion order.
    pub notifications: Vec<Notification>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
///
/// Owns its notification ledger exclusively: entries are appended and
/// flagged read only through this type, and they share the task's
/// lifetime (deleting the task removes the ledger with it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: DateTime<Utc>,
    created_by: Principal,
    assigned_to: Principal,
    notifications: Vec<Notification>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task on behalf of `creator`.
    ///
    /// The assignee defaults to the creator when unspecified. Exactly one
    /// notification recording the initial assignment is appended.
    #[must_use]
    pub fn create(creator: Principal, data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let assigned_to = data.assigned_to.unwrap_or_else(|| creator.clone());
        let message = format!(
            "Task \"{}\" has been created and assigned",
            data.title.as_str()
        );

        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            created_by: creator,
            assigned_to,
            notifications: vec![Notification::new(message, timestamp)],
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            created_by: data.created_by,
            assigned_to: data.assigned_to,
            notifications: data.notifications,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the creator. Immutable after construction; no mutator
    /// exists.
    #[must_use]
    pub const fn created_by(&self) -> &Principal {
        &self.created_by
    }

    /// Returns the current assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> &Principal {
        &self.assigned_to
    }

    /// Returns the notification ledger in insertion order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update, retaining any field not supplied.
    ///
    /// When the supplied assignee differs from the current one, a
    /// reassignment notification is appended using the updated title (the
    /// incoming title, when one is supplied, takes precedence over the
    /// stale one for message composition). Supplying the current assignee
    /// again appends nothing.
    pub fn apply_update(&mut self, changes: TaskChanges, clock: &impl Clock) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        let reassigned = changes
            .assigned_to
            .is_some_and(|assignee| self.reassign(assignee));
        if reassigned {
            let message = format!("Task \"{}\" has been reassigned", self.title.as_str());
            self.append_notification(message, clock);
        }
        self.touch(clock);
    }

    /// Sets the status to completed.
    ///
    /// The policy guard rejects completion of an already-completed task
    /// before this is reached; the operation itself is a plain one-way
    /// status write.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Completed;
        self.touch(clock);
    }

    /// Appends a system-generated entry to the notification ledger and
    /// returns its identifier. Entries keep insertion order and are never
    /// reordered.
    pub fn append_notification(
        &mut self,
        message: impl Into<String>,
        clock: &impl Clock,
    ) -> NotificationId {
        let notification = Notification::new(message.into(), clock.utc());
        let id = notification.id();
        self.notifications.push(notification);
        id
    }

    /// Flags a single ledger entry as read. Idempotent once set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotificationNotFound`] when the id is
    /// absent from this task's ledger.
    pub fn mark_notification_read(&mut self, id: NotificationId) -> Result<(), TaskDomainError> {
        let entry = self
            .notifications
            .iter_mut()
            .find(|notification| notification.id() == id)
            .ok_or(TaskDomainError::NotificationNotFound(id))?;
        entry.mark_read();
        Ok(())
    }

    /// Returns the count of unread ledger entries. Derived on read, never
    /// stored.
    #[must_use]
    pub fn unread_notifications(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| !notification.is_read())
            .count()
    }

    /// Swaps the assignee, reporting whether it actually changed.
    fn reassign(&mut self, assignee: Principal) -> bool {
        if assignee.id() == self.assigned_to.id() {
            return false;
        }
        self.assigned_to = assignee;
        true
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
