//! User directory for Taskdeck.
//!
//! This module exposes the user records the task core reads: the full
//! listing used by assignment pickers, single-profile lookup, and the
//! self-only profile update. Credential material never passes through
//! here. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
