//! pathGate gateway library entry.
//!
//! Wires the collaborator implementations, the gate middleware, metrics, and
//! a demo document store into an axum stack. It is consumed by the binary
//! (`main.rs`) and by integration tests; other services can use [`gate::Gate`]
//! directly to protect their own routers.

pub mod app_state;
pub mod collaborators;
pub mod config;
pub mod gate;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;

pub use gate::{gate_middleware, Gate, GateOutcome};
