//! Daily attendance marks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Record;

server_choice! {
    #[derive(Default)]
    AttendanceStatus ("attendance status") {
        #[default]
        Present => "Present",
        Absent => "Absent",
    }
}

/// One employee's mark for one day.
///
/// The server stamps `date` with the current day and refuses a second mark
/// for the same employee and day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    #[serde(default)]
    pub employee: Option<i64>,
    /// Full name when the user has one, otherwise the username
    #[serde(default)]
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl Record for AttendanceRecord {
    fn id(&self) -> i64 {
        self.id
    }
}
