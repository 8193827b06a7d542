//! Complaints raised by employees and resolved by admins.

use serde::{Deserialize, Serialize};

use crate::Record;

server_choice! {
    /// Complaint workflow state
    #[derive(Default)]
    ComplaintStatus ("complaint status") {
        #[default]
        Pending => "Pending",
        Resolved => "Resolved",
        Dismissed => "Dismissed",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Complaint {
    pub id: i64,
    /// Filing employee's user id (set by the server)
    #[serde(default)]
    pub employee: Option<i64>,
    pub subject: String,
    pub description: String,
    #[serde(default)]
    pub status: ComplaintStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Record for Complaint {
    fn id(&self) -> i64 {
        self.id
    }
}
