//! Authorization policy over task operations.
//!
//! A pure decision function: no I/O, no clock, no allocation. Existence
//! of the task is established by the caller before the policy runs, so a
//! missing task surfaces as not-found and never as a policy denial.

use super::{Task, TaskStatus};
use crate::auth::domain::Principal;

/// Operations gated by the task authorization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskAction {
    /// View the task and its ledger.
    Read,
    /// Change task fields, including reassignment.
    Update,
    /// Remove the task and cascade its ledger.
    Delete,
    /// Set the status to completed.
    MarkComplete,
    /// Flag a ledger entry as read.
    ReadNotification,
}

/// Decides whether `principal` may perform `action` on `task`.
///
/// Creators may update and delete; assignees may complete (once); both
/// may read the task and its notifications. Completion of an
/// already-completed task is denied here so duplicate completion side
/// effects cannot occur.
#[must_use]
pub fn permit(principal: &Principal, task: &Task, action: TaskAction) -> bool {
    let is_creator = principal.id() == task.created_by().id();
    let is_assignee = principal.id() == task.assigned_to().id();

    match action {
        TaskAction::Read | TaskAction::ReadNotification => is_creator || is_assignee,
        TaskAction::Update | TaskAction::Delete => is_creator,
        TaskAction::MarkComplete => is_assignee && task.status() != TaskStatus::Completed,
    }
}
