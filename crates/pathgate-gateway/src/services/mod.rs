//! Downstream services served behind the gate.

pub mod store;

pub use store::DocumentStore;
