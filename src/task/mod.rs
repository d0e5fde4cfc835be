//! Task lifecycle management for Taskdeck.
//!
//! This module implements the task core: create/update/delete/complete
//! operations guarded by the authorization policy, status and assignment
//! transition rules, and the per-task notification ledger. The ledger is
//! an owned child collection of the task aggregate; notifications are
//! appended only as a side effect of creation and reassignment and are
//! removed only when their parent task is deleted. The module follows
//! hexagonal architecture:
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
