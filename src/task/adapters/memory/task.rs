//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::domain::UserId;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Stands in for the document store in tests and local runs; filter
/// translation mirrors what a storage query would do.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Applies visibility and filter criteria to a single task.
fn matches(task: &Task, requester: UserId, filter: &TaskFilter) -> bool {
    let visible = task.created_by().id() == requester || task.assigned_to().id() == requester;
    if !visible {
        return false;
    }
    if filter.status().is_some_and(|status| task.status() != status) {
        return false;
    }
    if filter
        .priority()
        .is_some_and(|priority| task.priority() != priority)
    {
        return false;
    }
    if filter
        .due_before()
        .is_some_and(|bound| task.due_date() > bound)
    {
        return false;
    }
    if filter
        .assigned_to()
        .is_some_and(|scope| task.assigned_to().id() != scope.resolve(requester))
    {
        return false;
    }
    if filter
        .created_by()
        .is_some_and(|scope| task.created_by().id() != scope.resolve(requester))
    {
        return false;
    }
    filter.search().is_none_or(|search| {
        let needle = search.to_lowercase();
        task.title().as_str().to_lowercase().contains(&needle)
            || task.description().as_str().to_lowercase().contains(&needle)
    })
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::Duplicate(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        // Last write wins: no version check is carried.
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn find_visible(
        &self,
        requester: UserId,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .values()
            .filter(|task| matches(task, requester, filter))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(tasks)
    }
}
