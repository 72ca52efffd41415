//! Lightweight in-process metrics (dependency-free).
//!
//! Gate outcomes and collaborator failures are counted as atomics and
//! rendered in Prometheus text format by the `/metrics` handler.

pub mod metrics;

pub use metrics::GateMetrics;
