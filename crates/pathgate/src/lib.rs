//! Top-level facade crate for pathGate.
//!
//! Re-exports the core decision types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use pathgate_core::*;
}

pub mod gateway {
    pub use pathgate_gateway::*;
}
