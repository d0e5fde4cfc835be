//! Unit tests for the task core.

mod service_tests;

use crate::auth::domain::{Principal, UserId};
use crate::task::domain::{NewTaskData, TaskDescription, TaskPriority, TaskStatus, TaskTitle};
use chrono::{DateTime, Duration, Utc};
use mockable::{Clock, DefaultClock};

/// A distinct principal for tests.
pub(crate) fn principal(name: &str) -> Principal {
    Principal::new(
        UserId::new(),
        name,
        format!("{}@example.com", name.to_lowercase()),
    )
}

/// A due date comfortably in the future.
pub(crate) fn future_due_date() -> DateTime<Utc> {
    DefaultClock.utc() + Duration::days(7)
}

/// Valid construction data for a task titled "Write report".
pub(crate) fn report_task_data(assigned_to: Option<Principal>) -> NewTaskData {
    NewTaskData {
        title: TaskTitle::new("Write report").expect("valid title"),
        description: TaskDescription::new("Draft the quarterly report").expect("valid description"),
        due_date: future_due_date(),
        priority: TaskPriority::High,
        status: TaskStatus::Todo,
        assigned_to,
    }
}
