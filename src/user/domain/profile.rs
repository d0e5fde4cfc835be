//! User directory records.

use crate::auth::domain::{Principal, UserId};
use serde::{Deserialize, Serialize};

/// A user record as exposed by the directory.
///
/// Carries only what task assignment and display need; password hashes
/// and other credential material stay in the excluded auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    name: String,
    email: String,
}

impl UserProfile {
    /// Creates a profile from its identity fields.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replaces the display name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Converts the record into a principal reference for embedding in a
    /// task.
    #[must_use]
    pub fn into_principal(self) -> Principal {
        Principal::new(self.id, self.name, self.email)
    }
}
