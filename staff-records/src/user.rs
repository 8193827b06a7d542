//! User directory entries.

use serde::{Deserialize, Serialize};

use crate::Record;

/// Entry from `GET users/` (the backend returns only id and username).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

impl Record for UserSummary {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Username for `id`, or the bare id when the directory has no match.
pub fn display_name(users: &[UserSummary], id: i64) -> String {
    users
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.username.clone())
        .unwrap_or_else(|| format!("#{}", id))
}
