//! Session authentication for Taskdeck.
//!
//! This module owns the session token boundary: validating a bearer token
//! into an authenticated [`domain::Principal`], the client-side session
//! state machine (`Unknown → Loading → {Authenticated, Anonymous}`), and
//! the route-admission rule that redirects unauthenticated navigation.
//! Credential issuance (registration, login token minting) is an external
//! collaborator; this module only consumes and validates the resulting
//! signed token. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
