//! Unit tests for session authentication.

mod guard_tests;
mod session_tests;

use crate::auth::domain::{SessionClaims, UserId};
use jsonwebtoken::{Algorithm, EncodingKey, Header};

/// Shared signing secret for token-minting helpers.
pub(crate) const TEST_SECRET: &[u8] = b"taskdeck-test-secret";

/// Mints a signed token for the given subject expiring at `exp`.
pub(crate) fn mint_token(sub: UserId, name: &str, email: &str, exp: i64) -> String {
    let claims = SessionClaims {
        sub,
        name: name.to_owned(),
        email: email.to_owned(),
        exp,
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("token encoding should succeed")
}
