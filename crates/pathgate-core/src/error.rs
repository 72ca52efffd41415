//! Shared error type across pathGate crates.
//!
//! Collaborators (grant sources, path resolvers) report failures through
//! `PathGateError`. A failure either carries an explicit HTTP status
//! classification or it does not; unclassified failures are never shown to
//! the client in detail.

use thiserror::Error;

/// Whether an error carries an explicit status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Carries a status that is propagated to the client as-is.
    Classified,
    /// Anything else; surfaced as a generic internal error.
    Unclassified,
}

impl ErrorClass {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorClass::Classified => "classified",
            ErrorClass::Unclassified => "unclassified",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PathGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum PathGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("status {code}: {msg}")]
    Status { code: u16, msg: String },
    #[error("internal: {0}")]
    Internal(String),
}

impl PathGateError {
    /// Explicit status classification, `None` for unclassified failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            PathGateError::BadRequest(_) => Some(400),
            PathGateError::Unauthorized(_) => Some(401),
            PathGateError::Status { code, .. } => Some(*code),
            PathGateError::Internal(_) => None,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self.status() {
            Some(_) => ErrorClass::Classified,
            None => ErrorClass::Unclassified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(PathGateError::BadRequest("x".into()).status(), Some(400));
        assert_eq!(PathGateError::Unauthorized("x".into()).status(), Some(401));
        let teapot = PathGateError::Status { code: 418, msg: "short and stout".into() };
        assert_eq!(teapot.status(), Some(418));
        assert_eq!(teapot.class(), ErrorClass::Classified);

        let internal = PathGateError::Internal("db down".into());
        assert_eq!(internal.status(), None);
        assert_eq!(internal.class().as_str(), "unclassified");
    }
}
