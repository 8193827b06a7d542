//! Feature screens: one generic list-and-form screen, instantiated for each
//! resource collection.

pub mod form;
pub mod notify;
pub mod specs;
pub mod state;

pub use form::{FieldKind, FieldSpec, FormState};
pub use notify::{NoticeKind, Notices, Notification, NotificationSlot};
pub use specs::{QuickStatus, RowAction, ScreenSpec};
pub use state::{load, load_users, submit, update, ScreenCell, ScreenState, Wording};

use chrono::DateTime;
use serde::de::DeserializeOwned;
use staff_records::salary::net_preview;
use staff_records::user::display_name;
use staff_records::{
    Amount, AttendanceRecord, Complaint, Message, Record, SalaryRecord, Task, UserSummary,
};

/// A record a feature screen can list.
pub trait ScreenRecord: Record + DeserializeOwned + Clone + PartialEq + 'static {
    /// Table headers, matching [`ScreenRecord::cells`]
    const COLUMNS: &'static [&'static str];

    fn cells(&self, users: &[UserSummary]) -> Vec<String>;

    /// Current status, for rows with a status action.
    fn status(&self) -> Option<&str> {
        None
    }
}

/// Headers `spec` shows for `R`.
pub fn headers<R: ScreenRecord>(spec: &ScreenSpec) -> Vec<&'static str> {
    R::COLUMNS
        .iter()
        .copied()
        .filter(|column| !spec.hidden_columns.contains(column))
        .collect()
}

/// Cells of one table row, lined up with [`headers`].
pub fn row_cells<R: ScreenRecord>(
    spec: &ScreenSpec,
    record: &R,
    users: &[UserSummary],
) -> Vec<String> {
    R::COLUMNS
        .iter()
        .zip(record.cells(users))
        .filter(|(column, _)| !spec.hidden_columns.contains(column))
        .map(|(_, cell)| cell)
        .collect()
}

impl ScreenRecord for Complaint {
    const COLUMNS: &'static [&'static str] =
        &["ID", "Employee", "Subject", "Description", "Status", "Filed"];

    fn cells(&self, users: &[UserSummary]) -> Vec<String> {
        let employee = self
            .employee
            .map(|id| display_name(users, id))
            .unwrap_or_else(|| "-".to_string());
        vec![
            self.id.to_string(),
            employee,
            self.subject.clone(),
            self.description.clone(),
            self.status.to_string(),
            short_timestamp(self.created_at.as_deref()),
        ]
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl ScreenRecord for AttendanceRecord {
    const COLUMNS: &'static [&'static str] = &["Date", "Employee", "Status"];

    fn cells(&self, users: &[UserSummary]) -> Vec<String> {
        let employee = match (&self.employee_name, self.employee) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => display_name(users, id),
            (None, None) => "-".to_string(),
        };
        vec![self.date.to_string(), employee, self.status.to_string()]
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl ScreenRecord for Task {
    const COLUMNS: &'static [&'static str] = &[
        "Title",
        "Description",
        "Assigned to",
        "Priority",
        "Due",
        "Status",
    ];

    fn cells(&self, users: &[UserSummary]) -> Vec<String> {
        let assignee = self
            .assigned_to_username
            .clone()
            .unwrap_or_else(|| display_name(users, self.assigned_to));
        vec![
            self.title.clone(),
            self.description.clone(),
            assignee,
            self.priority.to_string(),
            self.due_date.to_string(),
            self.status.to_string(),
        ]
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl ScreenRecord for Message {
    const COLUMNS: &'static [&'static str] = &["From", "To", "Message", "Sent"];

    fn cells(&self, _users: &[UserSummary]) -> Vec<String> {
        vec![
            self.sender.clone(),
            self.recipient.clone(),
            self.content.clone(),
            short_timestamp(self.timestamp.as_deref()),
        ]
    }
}

impl ScreenRecord for SalaryRecord {
    const COLUMNS: &'static [&'static str] = &[
        "Date",
        "Employee",
        "Basic",
        "Bonuses",
        "Deductions",
        "Net",
    ];

    fn cells(&self, users: &[UserSummary]) -> Vec<String> {
        let employee = self
            .employee_name
            .clone()
            .unwrap_or_else(|| display_name(users, self.employee));
        vec![
            self.date.to_string(),
            employee,
            self.basic_salary.to_string(),
            self.bonuses.to_string(),
            self.deductions.to_string(),
            self.net_salary.to_string(),
        ]
    }
}

/// `2024-03-01 09:30` for an RFC 3339 timestamp; anything else is shown as
/// the server sent it.
pub fn short_timestamp(raw: Option<&str>) -> String {
    match raw {
        None => "-".to_string(),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

/// Net salary for the values currently in the salary form.
///
/// Display only: the server computes the stored figure. Blank or malformed
/// inputs count as zero; `None` means the total is out of range.
pub fn net_salary_preview(form: &FormState) -> Option<Amount> {
    let amount = |name: &str| form.get(name).trim().parse::<Amount>().unwrap_or(Amount::ZERO);
    net_preview(
        amount("basic_salary"),
        amount("bonuses"),
        amount("deductions"),
    )
}
