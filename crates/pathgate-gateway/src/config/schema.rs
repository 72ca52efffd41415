use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::http::HeaderName;
use serde::Deserialize;

use pathgate_core::error::{PathGateError, Result};
use pathgate_core::PathGrant;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub identity: IdentitySection,

    pub grants: GrantSourceConfig,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PathGateError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.identity.validate()?;
        self.grants.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// URI prefix under which gated resources are served.
    #[serde(default = "default_mount")]
    pub mount: String,

    /// Upper bound on document bodies accepted by the store.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            mount: default_mount(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.mount.starts_with('/') {
            return Err(PathGateError::BadRequest(
                "gateway.mount must start with '/'".into(),
            ));
        }
        if self.mount.len() > 1 && self.mount.ends_with('/') {
            return Err(PathGateError::BadRequest(
                "gateway.mount must not end with '/'".into(),
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(PathGateError::BadRequest(
                "gateway.max_body_bytes must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            PathGateError::BadRequest(format!(
                "gateway.listen must be a valid SocketAddr: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_mount() -> String {
    "/files".into()
}
fn default_max_body_bytes() -> usize {
    1024 * 1024
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentitySection {
    /// Header carrying the already-authenticated user id.
    #[serde(default = "default_user_header")]
    pub user_header: String,
}

impl Default for IdentitySection {
    fn default() -> Self {
        Self {
            user_header: default_user_header(),
        }
    }
}

impl IdentitySection {
    pub fn validate(&self) -> Result<()> {
        self.header_name().map(|_| ())
    }

    pub fn header_name(&self) -> Result<HeaderName> {
        HeaderName::try_from(self.user_header.as_str()).map_err(|_| {
            PathGateError::BadRequest(format!(
                "identity.user_header is not a valid header name: {}",
                self.user_header
            ))
        })
    }
}

fn default_user_header() -> String {
    "x-user-id".into()
}

/// Where grants come from.
#[derive(Debug, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case", deny_unknown_fields)]
pub enum GrantSourceConfig {
    /// Grants listed inline, keyed by user id.
    Static {
        #[serde(default)]
        users: BTreeMap<String, Vec<PathGrant>>,
    },
    /// Grants read from a YAML file on every request.
    File { path: String },
}

impl GrantSourceConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            GrantSourceConfig::Static { users } => validate_users(users),
            GrantSourceConfig::File { path } => {
                if path.trim().is_empty() {
                    return Err(PathGateError::BadRequest(
                        "grants.path must not be empty".into(),
                    ));
                }
                Ok(())
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GrantSourceConfig::Static { .. } => "static",
            GrantSourceConfig::File { .. } => "file",
        }
    }
}

/// An empty grant path is a prefix of every path; refuse it in config so a
/// typo cannot open up the whole tree.
pub fn validate_users(users: &BTreeMap<String, Vec<PathGrant>>) -> Result<()> {
    for (user, grants) in users {
        if grants.iter().any(|g| g.path.is_empty()) {
            return Err(PathGateError::BadRequest(format!(
                "grant for user {user} has an empty path"
            )));
        }
    }
    Ok(())
}
