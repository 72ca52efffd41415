use async_trait::async_trait;
use axum::http::request::Parts;

use pathgate_core::error::{PathGateError, Result};

use super::PathResolver;

/// Canonical path = URI path with the gateway mount stripped.
///
/// `/files/docs/a.txt` under mount `/files` resolves to `/docs/a.txt`, and the
/// bare mount resolves to `/`. The path is not decoded or case-folded.
#[derive(Debug, Clone)]
pub struct MountPathResolver {
    mount: String,
}

impl MountPathResolver {
    pub fn new(mount: impl Into<String>) -> Self {
        let mut mount = mount.into();
        while mount.ends_with('/') {
            mount.pop();
        }
        Self { mount }
    }

    pub fn resolve(&self, uri_path: &str) -> Result<String> {
        let rest = uri_path
            .strip_prefix(self.mount.as_str())
            .ok_or_else(|| PathGateError::BadRequest(format!("path outside mount: {uri_path}")))?;

        let canonical = match rest {
            "" => "/",
            r if r.starts_with('/') => r,
            // "/filesX" shares the prefix but is not under "/files".
            _ => {
                return Err(PathGateError::BadRequest(format!(
                    "path outside mount: {uri_path}"
                )))
            }
        };

        if canonical.split('/').any(|seg| seg == "..") {
            return Err(PathGateError::BadRequest(format!(
                "parent segments are not allowed: {uri_path}"
            )));
        }
        Ok(canonical.to_string())
    }
}

#[async_trait]
impl PathResolver for MountPathResolver {
    async fn resolve_path(&self, req: &Parts) -> Result<String> {
        self.resolve(req.uri.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_mount() {
        let r = MountPathResolver::new("/files");
        assert_eq!(r.resolve("/files/docs/a.txt").unwrap(), "/docs/a.txt");
        assert_eq!(r.resolve("/files").unwrap(), "/");
        assert_eq!(r.resolve("/files/").unwrap(), "/");
    }

    #[test]
    fn root_mount_is_identity() {
        let r = MountPathResolver::new("/");
        assert_eq!(r.resolve("/docs/a.txt").unwrap(), "/docs/a.txt");
    }

    #[test]
    fn rejects_outside_and_traversal() {
        let r = MountPathResolver::new("/files");
        for p in ["/other/a", "/filesX/a", "/files/docs/../secret", "/files/.."] {
            let err = r.resolve(p).unwrap_err();
            assert_eq!(err.status(), Some(400), "{p}");
        }
    }

    #[test]
    fn keeps_encoding() {
        let r = MountPathResolver::new("/files");
        assert_eq!(r.resolve("/files/a%20b").unwrap(), "/a%20b");
    }
}
