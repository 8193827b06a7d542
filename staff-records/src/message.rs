//! Direct messages between users.

use serde::{Deserialize, Serialize};

use crate::Record;

/// A message as listed by `GET messages/`.
///
/// `sender` and `recipient` are usernames. The server fills in `sender`
/// from the token and looks `recipient` up by username on create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: i64,
    pub sender: String,
    pub recipient: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Record for Message {
    fn id(&self) -> i64 {
        self.id
    }
}
