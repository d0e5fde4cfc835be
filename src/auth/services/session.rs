//! Client-side session lifecycle.
//!
//! The session is an explicit context object threaded through the client
//! call path rather than an ambient singleton. Its lifecycle is
//! `Unknown → Loading → {Authenticated, Anonymous}`; logout and reactive
//! degradation both land in `Anonymous` and discard the held token
//! synchronously.

use super::SessionGuard;
use crate::auth::domain::{AuthError, Principal};
use mockable::Clock;

/// Authentication state of a client session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No restore attempt has started yet.
    Unknown,
    /// A stored token is being validated.
    Loading,
    /// A token validated; the principal is available.
    Authenticated(Principal),
    /// No valid session is held.
    Anonymous,
}

/// Client session context: current state plus the token outbound calls
/// must carry.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    token: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a fresh session in the `Unknown` state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Unknown,
            token: None,
        }
    }

    /// Returns the current session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns true once a principal is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Returns true until the initial restore attempt completes.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Unknown | SessionState::Loading)
    }

    /// Returns the authenticated principal, if any.
    #[must_use]
    pub const fn principal(&self) -> Option<&Principal> {
        match &self.state {
            SessionState::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }

    /// Returns the token every outbound call must carry while
    /// authenticated.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        if self.is_authenticated() {
            self.token.as_deref()
        } else {
            None
        }
    }

    /// Begins the restore attempt with a token recovered from client
    /// storage, moving to `Loading`.
    pub fn begin_restore(&mut self, stored_token: Option<String>) {
        self.token = stored_token;
        self.state = SessionState::Loading;
    }

    /// Completes the restore attempt by validating the stored token.
    ///
    /// A missing or invalid token lands in `Anonymous` and the token is
    /// discarded; there is nothing to surface to the user at this point.
    pub fn complete_restore<C>(&mut self, guard: &SessionGuard<C>)
    where
        C: Clock + Send + Sync,
    {
        let validated = self
            .token
            .as_deref()
            .map(|token| guard.validate(token));
        match validated {
            Some(Ok(principal)) => {
                self.state = SessionState::Authenticated(principal);
            }
            Some(Err(_)) | None => {
                self.token = None;
                self.state = SessionState::Anonymous;
            }
        }
    }

    /// Adopts a freshly minted token handed over by the credential issuer
    /// after login or registration.
    ///
    /// # Errors
    ///
    /// Returns the validation failure and leaves the session `Anonymous`
    /// when the token does not verify.
    pub fn establish<C>(
        &mut self,
        token: String,
        guard: &SessionGuard<C>,
    ) -> Result<(), AuthError>
    where
        C: Clock + Send + Sync,
    {
        match guard.validate(&token) {
            Ok(principal) => {
                self.token = Some(token);
                self.state = SessionState::Authenticated(principal);
                Ok(())
            }
            Err(err) => {
                self.token = None;
                self.state = SessionState::Anonymous;
                Err(err)
            }
        }
    }

    /// Ends the session synchronously, discarding the token immediately.
    ///
    /// No server round-trip is required; the token simply stops being
    /// presented.
    pub fn logout(&mut self) {
        self.token = None;
        self.state = SessionState::Anonymous;
    }

    /// Degrades the session after an outbound call was rejected as
    /// unauthenticated (an expired token discovered reactively).
    pub fn degrade(&mut self) {
        self.token = None;
        self.state = SessionState::Anonymous;
    }
}
