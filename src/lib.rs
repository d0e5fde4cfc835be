//! Taskdeck: task tracking core for small teams.
//!
//! This crate provides the authorization and session-lifecycle core of a
//! task tracker: who may read, mutate, or delete a task; the status and
//! assignment transition rules; the per-task notification ledger; and the
//! client-side session state machine that gates access to all of it.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, APIs, etc.)
//!
//! Persistent storage and the HTTP transport are external collaborators
//! consumed through ports and the [`api`] boundary types respectively.
//!
//! # Modules
//!
//! - [`auth`]: Session token validation and client session lifecycle
//! - [`task`]: Task lifecycle, authorization policy, and notification ledger
//! - [`user`]: User directory consulted for assignment and profile updates
//! - [`api`]: Request validation and error-to-status mapping at the boundary

pub mod api;
pub mod auth;
pub mod task;
pub mod user;
