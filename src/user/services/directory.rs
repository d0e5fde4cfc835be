//! Service layer for user directory reads and self-profile updates.

use crate::auth::domain::{Principal, UserId};
use crate::user::{
    domain::UserProfile,
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// The caller may only update their own profile.
    #[error("not authorized to update this user")]
    Forbidden,

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user directory service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserDirectoryService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserDirectoryService<R>
where
    R: UserRepository,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every directory record, for assignment pickers.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> UserServiceResult<Vec<UserProfile>> {
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a single record.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::NotFound`] when the id is unknown.
    pub async fn get(&self, id: UserId) -> UserServiceResult<UserProfile> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::NotFound(id))
    }

    /// Renames a profile. Restricted to the requesting principal's own
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Forbidden`] when `id` is not the
    /// caller's own, and [`UserServiceError::NotFound`] when the record
    /// does not exist.
    pub async fn update_profile(
        &self,
        principal: &Principal,
        id: UserId,
        name: impl Into<String> + Send,
    ) -> UserServiceResult<UserProfile> {
        if principal.id() != id {
            return Err(UserServiceError::Forbidden);
        }
        let mut profile = self.get(id).await?;
        profile.rename(name);
        self.repository.update(&profile).await?;
        tracing::debug!(user = %id, "profile renamed");
        Ok(profile)
    }
}
