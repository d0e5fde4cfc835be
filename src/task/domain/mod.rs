//! Domain model for the task core.
//!
//! The task domain models the task aggregate with its embedded
//! notification ledger, the authorization policy over task operations,
//! and validated scalar types, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod notification;
mod policy;
mod task;

pub use error::{ParsePriorityError, ParseStatusError, TaskDomainError};
pub use ids::{NotificationId, TaskDescription, TaskId, TaskTitle};
pub use notification::Notification;
pub use policy::{TaskAction, permit};
pub use task::{NewTaskData, PersistedTaskData, Task, TaskChanges, TaskPriority, TaskStatus};
