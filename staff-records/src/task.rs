//! Tasks assigned by admins to employees.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Record;

server_choice! {
    #[derive(Default)]
    TaskStatus ("task status") {
        #[default]
        Pending => "Pending",
        InProgress => "In Progress",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

server_choice! {
    #[derive(Default)]
    TaskPriority ("task priority") {
        Low => "Low",
        #[default]
        Medium => "Medium",
        High => "High",
    }
}

impl TaskStatus {
    /// Status an employee's completion toggle moves to.
    pub fn toggled(&self) -> TaskStatus {
        match self {
            TaskStatus::Completed => TaskStatus::Pending,
            _ => TaskStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub assigned_to: i64,
    #[serde(default)]
    pub assigned_to_username: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Record for Task {
    fn id(&self) -> i64 {
        self.id
    }
}
