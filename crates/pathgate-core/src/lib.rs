//! pathGate core: grant data model, the authorization decision, and the
//! shared error surface.
//!
//! This crate knows nothing about HTTP servers or async runtimes. The decision
//! is a pure function of (grants, canonical path, method) so it can be reused
//! by any transport binding and tested without one.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Bad input can only ever produce a `Deny` or a `PathGateError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decision;
pub mod error;
pub mod grant;
pub mod operation;

pub use decision::{decide, decide_operation, matching_grant, Decision};
pub use error::{ErrorClass, PathGateError};
/// Shared result type.
pub use error::Result;
pub use grant::{AccessLevel, PathGrant};
pub use operation::OperationKind;
