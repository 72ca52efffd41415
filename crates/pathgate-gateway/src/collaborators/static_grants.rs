use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::request::Parts;

use pathgate_core::{PathGrant, Result};

use super::{GrantSource, UserHeader};

/// In-memory `user -> grants` table, built once from config.
///
/// Unknown users hold no grants, which the decision turns into a deny.
#[derive(Debug)]
pub struct StaticGrantSource {
    identity: UserHeader,
    users: HashMap<String, Vec<PathGrant>>,
}

impl StaticGrantSource {
    pub fn new<I>(identity: UserHeader, users: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<PathGrant>)>,
    {
        Self {
            identity,
            users: users.into_iter().collect(),
        }
    }
}

#[async_trait]
impl GrantSource for StaticGrantSource {
    async fn resolve_grants(&self, req: &Parts) -> Result<Vec<PathGrant>> {
        let user = self.identity.user_id(req)?;
        Ok(self.users.get(user).cloned().unwrap_or_default())
    }
}
