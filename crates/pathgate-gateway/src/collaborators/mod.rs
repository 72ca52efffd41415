//! Collaborators consumed by the gate.
//!
//! The gate needs two answers per request: which grants the requester holds,
//! and which canonical path the request targets. Both are behind traits so a
//! deployment can swap a static table for a data-store-backed lookup without
//! touching the gate. Implementations must be safe to call concurrently.
//!
//! Collaborators only see the request head; the body travels on untouched.

pub mod file_grants;
pub mod identity;
pub mod mount_path;
pub mod static_grants;

use async_trait::async_trait;
use axum::http::request::Parts;

use pathgate_core::{PathGrant, Result};

pub use file_grants::FileGrantSource;
pub use identity::UserHeader;
pub use mount_path::MountPathResolver;
pub use static_grants::StaticGrantSource;

/// Resolves the complete grant set of the requester.
#[async_trait]
pub trait GrantSource: Send + Sync {
    async fn resolve_grants(&self, req: &Parts) -> Result<Vec<PathGrant>>;
}

/// Resolves the canonical resource path a request targets, in the same
/// string form as [`PathGrant::path`].
#[async_trait]
pub trait PathResolver: Send + Sync {
    async fn resolve_path(&self, req: &Parts) -> Result<String>;
}
