//! Claims carried by a signed session token.

use super::{Principal, UserId};
use serde::{Deserialize, Serialize};

/// Payload of a session token as minted by the credential issuer.
///
/// Expiry is a unix timestamp in seconds; signature verification and the
/// expiry check both live in the session guard, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the authenticated user's identifier.
    pub sub: UserId,
    /// Display name of the authenticated user.
    pub name: String,
    /// Email address of the authenticated user.
    pub email: String,
    /// Expiry as seconds since the unix epoch.
    pub exp: i64,
}

impl SessionClaims {
    /// Derives the request principal from validated claims.
    #[must_use]
    pub fn into_principal(self) -> Principal {
        Principal::new(self.sub, self.name, self.email)
    }
}
