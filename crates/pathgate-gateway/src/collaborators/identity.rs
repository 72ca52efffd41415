use axum::http::{request::Parts, HeaderName};

use pathgate_core::error::{PathGateError, Result};

/// Reads the requester's user id from a header set by an upstream
/// authenticator.
#[derive(Debug, Clone)]
pub struct UserHeader {
    name: HeaderName,
}

impl UserHeader {
    pub fn new(name: HeaderName) -> Self {
        Self { name }
    }

    /// Missing, empty, or non-UTF-8 values are `Unauthorized`.
    pub fn user_id<'a>(&self, req: &'a Parts) -> Result<&'a str> {
        let value = req
            .headers
            .get(&self.name)
            .ok_or_else(|| PathGateError::Unauthorized(format!("missing {} header", self.name)))?;
        let user = value
            .to_str()
            .map_err(|_| PathGateError::Unauthorized(format!("{} header is not valid utf-8", self.name)))?
            .trim();
        if user.is_empty() {
            return Err(PathGateError::Unauthorized(format!("empty {} header", self.name)));
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(header: Option<&str>) -> Parts {
        let mut b = Request::builder().uri("/files/a");
        if let Some(v) = header {
            b = b.header("x-user-id", v);
        }
        b.body(()).unwrap().into_parts().0
    }

    #[test]
    fn reads_trimmed_user() {
        let h = UserHeader::new(HeaderName::from_static("x-user-id"));
        assert_eq!(h.user_id(&parts(Some(" alice "))).unwrap(), "alice");
    }

    #[test]
    fn missing_or_blank_is_unauthorized() {
        let h = UserHeader::new(HeaderName::from_static("x-user-id"));
        assert_eq!(h.user_id(&parts(None)).unwrap_err().status(), Some(401));
        assert_eq!(h.user_id(&parts(Some("  "))).unwrap_err().status(), Some(401));
    }
}
