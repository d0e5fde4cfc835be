//! Repository port for user directory persistence.

use crate::auth::domain::UserId;
use crate::user::domain::UserProfile;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User directory persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every directory record (assignment pickers read this).
    async fn find_all(&self) -> UserRepositoryResult<Vec<UserProfile>>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when no such user exists.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<UserProfile>>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not
    /// exist.
    async fn update(&self, profile: &UserProfile) -> UserRepositoryResult<()>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
