//! Tests for bearer token validation.

use super::{TEST_SECRET, mint_token};
use crate::auth::domain::{AuthError, UserId};
use crate::auth::services::{SessionGuard, bearer_token};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn guard() -> SessionGuard<DefaultClock> {
    SessionGuard::from_secret(TEST_SECRET, Arc::new(DefaultClock))
}

fn future_exp() -> i64 {
    DefaultClock.utc().timestamp() + 3600
}

#[rstest]
fn validate_accepts_fresh_token(guard: SessionGuard<DefaultClock>) {
    let user = UserId::new();
    let token = mint_token(user, "Ada", "ada@example.com", future_exp());

    let principal = guard.validate(&token).expect("fresh token should validate");

    assert_eq!(principal.id(), user);
    assert_eq!(principal.name(), "Ada");
    assert_eq!(principal.email(), "ada@example.com");
}

#[rstest]
fn validate_rejects_expired_token(guard: SessionGuard<DefaultClock>) {
    let expired = DefaultClock.utc().timestamp() - 60;
    let token = mint_token(UserId::new(), "Ada", "ada@example.com", expired);

    assert_eq!(guard.validate(&token), Err(AuthError::ExpiredToken));
}

#[rstest]
fn validate_rejects_garbled_token(guard: SessionGuard<DefaultClock>) {
    let result = guard.validate("not-a-token");
    assert!(matches!(result, Err(AuthError::InvalidToken(_))));
}

#[rstest]
fn validate_rejects_wrong_signing_key(guard: SessionGuard<DefaultClock>) {
    let other = SessionGuard::from_secret(b"some-other-secret", Arc::new(DefaultClock));
    let token = mint_token(UserId::new(), "Ada", "ada@example.com", future_exp());

    // Sanity: the token verifies against the minting secret.
    guard.validate(&token).expect("token should verify");
    assert!(matches!(
        other.validate(&token),
        Err(AuthError::InvalidToken(_))
    ));
}

#[rstest]
fn validate_header_resolves_bearer_scheme(guard: SessionGuard<DefaultClock>) {
    let user = UserId::new();
    let token = mint_token(user, "Ada", "ada@example.com", future_exp());
    let header = format!("Bearer {token}");

    let principal = guard
        .validate_header(Some(&header))
        .expect("bearer header should validate");
    assert_eq!(principal.id(), user);
}

#[rstest]
#[case(None)]
#[case(Some("Basic dXNlcjpwYXNz"))]
#[case(Some("Bearer "))]
#[case(Some("token-without-scheme"))]
fn bearer_token_rejects_missing_or_malformed(#[case] header: Option<&str>) {
    assert_eq!(bearer_token(header), Err(AuthError::MissingToken));
}

#[rstest]
fn bearer_token_extracts_token() {
    assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
}
