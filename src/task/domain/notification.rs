//! Notification entries in a task's embedded ledger.

use super::NotificationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a task's notification ledger.
///
/// Entries are immutable except for the read flag, which transitions
/// false→true exactly once and never reverses. They are constructed only
/// by the parent task's append operation; messages are system-generated,
/// never user-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    message: String,
    created_at: DateTime<Utc>,
    read: bool,
}

impl Notification {
    /// Creates an unread entry. Crate-private: only the task aggregate
    /// appends to its own ledger.
    pub(crate) fn new(message: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: NotificationId::new(),
            message,
            created_at,
            read: false,
        }
    }

    /// Reconstructs an entry from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: NotificationId,
        message: String,
        created_at: DateTime<Utc>,
        read: bool,
    ) -> Self {
        Self {
            id,
            message,
            created_at,
            read,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the system-generated message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the append timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the entry has been read.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.read
    }

    /// Marks the entry read. Idempotent: the flag never reverses.
    pub(crate) const fn mark_read(&mut self) {
        self.read = true;
    }
}
