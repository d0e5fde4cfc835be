//! Domain model for session authentication.
//!
//! The auth domain models the authenticated principal, the claims carried
//! by a signed session token, and the failures that degrade a request to
//! unauthenticated, while keeping token-format concerns outside of the
//! domain boundary.

mod claims;
mod error;
mod principal;

pub use claims::SessionClaims;
pub use error::AuthError;
pub use principal::{Principal, UserId};
