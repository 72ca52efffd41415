//! Request method classification.

/// What a request does to the resource, collapsed for grant matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Only observes state (`GET`).
    Read,
    /// Creates, updates, replaces or deletes state
    /// (`POST`, `PATCH`, `PUT`, `DELETE`).
    Write,
}

impl OperationKind {
    /// Classify an HTTP method token.
    ///
    /// Returns `None` for methods no grant can satisfy (`HEAD`, `OPTIONS`,
    /// extension methods, ...). Method tokens are case-sensitive, so `get`
    /// is unmatchable as well.
    pub fn from_method(method: &str) -> Option<Self> {
        match method {
            "GET" => Some(OperationKind::Read),
            "POST" | "PATCH" | "PUT" | "DELETE" => Some(OperationKind::Write),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Read => "read",
            OperationKind::Write => "write",
        }
    }
}
