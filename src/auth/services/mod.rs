//! Application services for session authentication.

mod guard;
mod routes;
mod session;

pub use guard::{SessionGuard, bearer_token};
pub use routes::{Redirect, Route, admit};
pub use session::{Session, SessionState};
