//! Path grants.
//!
//! A grant `{ access, path }` means "the bearer may perform operations up to
//! `access` on any resource whose canonical path starts with `path`".

use serde::{Deserialize, Serialize};

use crate::operation::OperationKind;

/// Access level carried by a grant. `ReadWrite` permits everything `Read` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    #[serde(rename = "R", alias = "read")]
    Read,
    #[serde(rename = "RW", alias = "read_write")]
    ReadWrite,
}

impl AccessLevel {
    pub fn permits(self, op: OperationKind) -> bool {
        match (self, op) {
            (AccessLevel::Read | AccessLevel::ReadWrite, OperationKind::Read) => true,
            (AccessLevel::ReadWrite, OperationKind::Write) => true,
            (AccessLevel::Read, OperationKind::Write) => false,
        }
    }
}

/// Permission to access resources under `path` up to `access`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathGrant {
    pub access: AccessLevel,
    pub path: String,
}

impl PathGrant {
    pub fn new(access: AccessLevel, path: impl Into<String>) -> Self {
        Self { access, path: path.into() }
    }

    pub fn read(path: impl Into<String>) -> Self {
        Self::new(AccessLevel::Read, path)
    }

    pub fn read_write(path: impl Into<String>) -> Self {
        Self::new(AccessLevel::ReadWrite, path)
    }

    /// Plain byte-wise prefix test. Not segment aware: `/docs` covers
    /// `/docs-private` too.
    pub fn covers(&self, requested_path: &str) -> bool {
        requested_path.starts_with(self.path.as_str())
    }

    pub fn permits(&self, op: OperationKind) -> bool {
        self.access.permits(op)
    }
}
