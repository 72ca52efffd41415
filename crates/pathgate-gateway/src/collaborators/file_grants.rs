//! Grants kept in a YAML file outside the gateway config.
//!
//! The file is read on every request; edits take effect immediately and
//! nothing is cached. File format:
//!
//! ```yaml
//! users:
//!   alice:
//!     - { access: RW, path: "/home/alice" }
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use axum::http::request::Parts;
use serde::Deserialize;

use pathgate_core::error::{PathGateError, Result};
use pathgate_core::PathGrant;

use super::{GrantSource, UserHeader};
use crate::config::schema::validate_users;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GrantsFile {
    #[serde(default)]
    users: BTreeMap<String, Vec<PathGrant>>,
}

#[derive(Debug)]
pub struct FileGrantSource {
    identity: UserHeader,
    path: PathBuf,
}

impl FileGrantSource {
    pub fn new(identity: UserHeader, path: impl Into<PathBuf>) -> Self {
        Self {
            identity,
            path: path.into(),
        }
    }

    async fn load(&self) -> Result<GrantsFile> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PathGateError::Internal(format!("read grants file {} failed: {e}", self.path.display()))
        })?;
        let file: GrantsFile = serde_yaml::from_str(&raw).map_err(|e| {
            PathGateError::Internal(format!("invalid grants file {}: {e}", self.path.display()))
        })?;
        // A broken store is an operator problem, not the client's.
        validate_users(&file.users).map_err(|e| PathGateError::Internal(e.to_string()))?;
        Ok(file)
    }
}

#[async_trait]
impl GrantSource for FileGrantSource {
    async fn resolve_grants(&self, req: &Parts) -> Result<Vec<PathGrant>> {
        let user = self.identity.user_id(req)?;
        let mut file = self.load().await?;
        Ok(file.users.remove(user).unwrap_or_default())
    }
}
