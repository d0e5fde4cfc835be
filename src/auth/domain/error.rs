//! Error types for session authentication.

use thiserror::Error;

/// Errors returned while resolving a session token to a principal.
///
/// Every variant degrades the request to unauthenticated; the distinction
/// is diagnostic only and must not change the caller-visible outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer token was supplied with the request.
    #[error("missing bearer token")]
    MissingToken,

    /// The token could not be decoded or its signature did not verify.
    #[error("invalid session token: {0}")]
    InvalidToken(String),

    /// The token is well-formed but past its expiry.
    #[error("session token expired")]
    ExpiredToken,
}
