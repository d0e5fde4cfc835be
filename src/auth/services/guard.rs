//! Bearer token validation at the request boundary.

use crate::auth::domain::{AuthError, Principal, SessionClaims};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use mockable::Clock;
use std::sync::Arc;

/// Validates signed session tokens into authenticated principals.
///
/// The guard verifies the HS256 signature first, then checks expiry
/// against the injected clock so that tests remain deterministic. Every
/// failure mode (absent, malformed, bad signature, expired) yields an
/// [`AuthError`] and the request proceeds as unauthenticated.
#[derive(Clone)]
pub struct SessionGuard<C>
where
    C: Clock + Send + Sync,
{
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<C>,
}

impl<C> SessionGuard<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a guard verifying tokens against a shared HS256 secret.
    #[must_use]
    pub fn from_secret(secret: &[u8], clock: Arc<C>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against the injected clock in `validate`, not
        // the system clock inside the decoder.
        validation.validate_exp = false;
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }

    /// Resolves a raw token to its authenticated principal.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] when the token is malformed or
    /// its signature does not verify, and [`AuthError::ExpiredToken`] when
    /// the embedded expiry is not in the future.
    pub fn validate(&self, token: &str) -> Result<Principal, AuthError> {
        let data =
            jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
                .map_err(|err| AuthError::InvalidToken(err.to_string()))?;
        let claims = data.claims;
        if claims.exp <= self.clock.utc().timestamp() {
            return Err(AuthError::ExpiredToken);
        }
        Ok(claims.into_principal())
    }

    /// Resolves an `Authorization` header value to its principal.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingToken`] when the header is absent or
    /// does not carry the bearer scheme, otherwise as [`Self::validate`].
    pub fn validate_header(&self, header: Option<&str>) -> Result<Principal, AuthError> {
        let token = bearer_token(header)?;
        self.validate(token)
    }
}

/// Strips the `Bearer` scheme from an `Authorization` header value.
///
/// # Errors
///
/// Returns [`AuthError::MissingToken`] when the header is absent, uses a
/// different scheme, or carries an empty token.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let token = header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .ok_or(AuthError::MissingToken)?;
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}
