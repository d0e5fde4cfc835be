//! Port contracts for the task core.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{
    PrincipalScope, TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
