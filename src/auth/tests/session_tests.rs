//! Tests for the client session state machine.

use super::{TEST_SECRET, mint_token};
use crate::auth::domain::{AuthError, UserId};
use crate::auth::services::{Session, SessionGuard, SessionState};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn guard() -> SessionGuard<DefaultClock> {
    SessionGuard::from_secret(TEST_SECRET, Arc::new(DefaultClock))
}

fn fresh_token(user: UserId) -> String {
    let exp = DefaultClock.utc().timestamp() + 3600;
    mint_token(user, "Ada", "ada@example.com", exp)
}

#[rstest]
fn new_session_is_unknown_and_loading() {
    let session = Session::new();

    assert_eq!(session.state(), &SessionState::Unknown);
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
    assert!(session.bearer().is_none());
}

#[rstest]
fn restore_with_valid_token_authenticates(guard: SessionGuard<DefaultClock>) {
    let user = UserId::new();
    let mut session = Session::new();

    session.begin_restore(Some(fresh_token(user)));
    assert!(session.is_loading());

    session.complete_restore(&guard);

    assert!(session.is_authenticated());
    assert!(!session.is_loading());
    assert_eq!(session.principal().map(crate::auth::domain::Principal::id), Some(user));
    assert!(session.bearer().is_some());
}

#[rstest]
fn restore_without_token_lands_anonymous(guard: SessionGuard<DefaultClock>) {
    let mut session = Session::new();

    session.begin_restore(None);
    session.complete_restore(&guard);

    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(session.bearer().is_none());
}

#[rstest]
fn restore_with_expired_token_discards_it(guard: SessionGuard<DefaultClock>) {
    let expired = DefaultClock.utc().timestamp() - 60;
    let token = mint_token(UserId::new(), "Ada", "ada@example.com", expired);
    let mut session = Session::new();

    session.begin_restore(Some(token));
    session.complete_restore(&guard);

    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(session.bearer().is_none());
}

#[rstest]
fn establish_adopts_issued_token(guard: SessionGuard<DefaultClock>) {
    let user = UserId::new();
    let mut session = Session::new();

    session
        .establish(fresh_token(user), &guard)
        .expect("issued token should validate");

    assert!(session.is_authenticated());
    assert!(session.bearer().is_some());
}

#[rstest]
fn establish_with_bad_token_stays_anonymous(guard: SessionGuard<DefaultClock>) {
    let mut session = Session::new();

    let result = session.establish("garbage".to_owned(), &guard);

    assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(session.bearer().is_none());
}

#[rstest]
fn logout_is_synchronous_and_discards_token(guard: SessionGuard<DefaultClock>) {
    let mut session = Session::new();
    session
        .establish(fresh_token(UserId::new()), &guard)
        .expect("issued token should validate");

    session.logout();

    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(session.bearer().is_none());
}

#[rstest]
fn degrade_after_rejected_call_drops_session(guard: SessionGuard<DefaultClock>) {
    let mut session = Session::new();
    session
        .establish(fresh_token(UserId::new()), &guard)
        .expect("issued token should validate");

    // An outbound call came back unauthenticated: the token expired
    // mid-session and was discovered reactively.
    session.degrade();

    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(session.bearer().is_none());
}
