//! In-memory user directory repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::domain::UserId;
use crate::user::{
    domain::UserProfile,
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the directory with existing records.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn seed(
        &self,
        profiles: impl IntoIterator<Item = UserProfile>,
    ) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        for profile in profiles {
            state.insert(profile.id(), profile);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserRepositoryResult<Vec<UserProfile>> {
        let state = self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut profiles: Vec<UserProfile> = state.values().cloned().collect();
        profiles.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(profiles)
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<UserProfile>> {
        let state = self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn update(&self, profile: &UserProfile) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&profile.id()) {
            return Err(UserRepositoryError::NotFound(profile.id()));
        }
        state.insert(profile.id(), profile.clone());
        Ok(())
    }
}
