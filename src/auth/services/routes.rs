//! Route admission for the client.
//!
//! Admission is a pure transition function invoked on exactly two events:
//! the session state changed, or the current route changed. Each
//! invocation yields at most one redirect command. Redirect targets are
//! always admitted under the state that produced them, so a redirect can
//! never trigger another redirect.

use super::session::{Session, SessionState};

/// Client navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Public landing page.
    Home,
    /// Public about page.
    About,
    /// Sign-in entry point.
    Login,
    /// Registration entry point.
    Register,
    /// Authenticated dashboard entry point.
    Dashboard,
    /// Any other (protected) route, by path.
    Other(String),
}

impl Route {
    /// Returns true for routes reachable without a session.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Home | Self::About | Self::Login | Self::Register)
    }

    /// Returns true for the sign-in/registration entry points.
    #[must_use]
    pub const fn is_auth_entry(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

/// A single navigation command produced by admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Send the visitor to the sign-in entry point.
    ToLogin,
    /// Send the visitor to the dashboard entry point.
    ToDashboard,
}

impl Redirect {
    /// Returns the route this command navigates to.
    #[must_use]
    pub const fn target(self) -> Route {
        match self {
            Self::ToLogin => Route::Login,
            Self::ToDashboard => Route::Dashboard,
        }
    }
}

/// Decides whether the current route is admitted for the session.
///
/// No decision is made while the initial restore is still in flight;
/// admission re-runs once the session settles.
#[must_use]
pub fn admit(session: &Session, route: &Route) -> Option<Redirect> {
    match session.state() {
        SessionState::Unknown | SessionState::Loading => None,
        SessionState::Authenticated(_) => route.is_auth_entry().then_some(Redirect::ToDashboard),
        SessionState::Anonymous => (!route.is_public()).then_some(Redirect::ToLogin),
    }
}
