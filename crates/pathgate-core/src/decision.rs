//! The authorization decision.
//!
//! Matching is existential: a request is allowed when at least one grant
//! covers the requested path with a sufficient access level. Everything else,
//! including an empty grant list or an unmatchable method, is denied.

use crate::grant::PathGrant;
use crate::operation::OperationKind;

/// Outcome of evaluating grants against a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Deny => "deny",
        }
    }
}

/// Decide whether `method` on `requested_path` is allowed by `grants`.
pub fn decide(grants: &[PathGrant], requested_path: &str, method: &str) -> Decision {
    match OperationKind::from_method(method) {
        Some(op) => decide_operation(grants, requested_path, op),
        None => Decision::Deny,
    }
}

/// Same as [`decide`] for an operation that is already classified.
pub fn decide_operation(grants: &[PathGrant], requested_path: &str, op: OperationKind) -> Decision {
    if matching_grant(grants, requested_path, op).is_some() {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

/// First grant that allows `op` on `requested_path`, if any.
pub fn matching_grant<'a>(
    grants: &'a [PathGrant],
    requested_path: &str,
    op: OperationKind,
) -> Option<&'a PathGrant> {
    grants
        .iter()
        .find(|g| g.covers(requested_path) && g.permits(op))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_permitting_grant_wins_over_first_covering() {
        let grants = vec![PathGrant::read("/docs"), PathGrant::read_write("/docs/team")];
        let g = matching_grant(&grants, "/docs/team/plan.md", OperationKind::Write);
        assert_eq!(g, Some(&grants[1]));
    }

    #[test]
    fn duplicates_are_harmless() {
        let g = PathGrant::read("/a");
        let grants = vec![g.clone(), g.clone(), g];
        assert_eq!(decide(&grants, "/a/x", "GET"), Decision::Allow);
        assert_eq!(decide(&grants, "/a/x", "PUT"), Decision::Deny);
    }
}
