//! The ten feature screens.

use staff_records::{AttendanceStatus, ComplaintStatus, TaskPriority, TaskStatus};

use super::form::{FieldKind, FieldSpec};
use super::state::Wording;
use crate::router::Destination;

/// Per-row write a screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    None,
    /// Pick any of these statuses; sent as `{"status": ...}`
    StatusSelect(&'static [&'static str]),
    /// Flip between Completed and Pending
    CompletionToggle,
}

/// One-click status change offered beside the row action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStatus {
    pub label: &'static str,
    pub status: &'static str,
}

impl QuickStatus {
    /// Off for rows already in the target status and while a write is
    /// outstanding.
    pub fn enabled(&self, current: Option<&str>, busy: bool) -> bool {
        !busy && current != Some(self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSpec {
    pub destination: Destination,
    pub title: &'static str,
    /// Collection path under the API root
    pub path: &'static str,
    /// Create form; empty when the screen is read-only
    pub schema: &'static [FieldSpec],
    pub submit_label: &'static str,
    pub row_action: RowAction,
    pub quick_status: Option<QuickStatus>,
    /// Record columns this screen leaves out
    pub hidden_columns: &'static [&'static str],
    /// Offer a button that fetches the list again
    pub refresh: bool,
    /// Fetch `users/` for pickers and name columns
    pub needs_users: bool,
    /// Show the computed net salary under the form
    pub net_preview: bool,
    pub empty_text: &'static str,
    pub load_failure: &'static str,
    pub create_success: &'static str,
    pub create_failure: &'static str,
    pub update_success: &'static str,
    pub update_failure: &'static str,
}

impl ScreenSpec {
    pub fn has_form(&self) -> bool {
        !self.schema.is_empty()
    }

    pub fn create_wording(&self) -> Wording<'static> {
        Wording {
            load_failure: self.load_failure,
            success: self.create_success,
            failure: self.create_failure,
        }
    }

    /// `success` overrides the default text, for messages that name the
    /// new value.
    pub fn update_wording<'a>(&self, success: Option<&'a str>) -> Wording<'a> {
        Wording {
            load_failure: self.load_failure,
            success: success.unwrap_or(self.update_success),
            failure: self.update_failure,
        }
    }
}

const BASE: ScreenSpec = ScreenSpec {
    destination: Destination::Login,
    title: "",
    path: "",
    schema: &[],
    submit_label: "Submit",
    row_action: RowAction::None,
    quick_status: None,
    hidden_columns: &[],
    refresh: false,
    needs_users: false,
    net_preview: false,
    empty_text: "Nothing here yet.",
    load_failure: "",
    create_success: "",
    create_failure: "",
    update_success: "",
    update_failure: "",
};

const COMPLAINT_FORM: &[FieldSpec] = &[
    FieldSpec::required("subject", "Subject", FieldKind::Text),
    FieldSpec::required("description", "Description", FieldKind::TextArea),
];

const ATTENDANCE_FORM: &[FieldSpec] = &[FieldSpec::required(
    "status",
    "Status",
    FieldKind::Select(AttendanceStatus::LABELS),
)
.with_default("Present")];

const TASK_FORM: &[FieldSpec] = &[
    FieldSpec::required("title", "Title", FieldKind::Text),
    FieldSpec::required("description", "Description", FieldKind::TextArea),
    FieldSpec::required("assigned_to", "Assign to", FieldKind::UserPicker),
    FieldSpec::required("status", "Status", FieldKind::Select(TaskStatus::LABELS))
        .with_default("Pending"),
    FieldSpec::required("priority", "Priority", FieldKind::Select(TaskPriority::LABELS))
        .with_default("Medium"),
    FieldSpec::required("due_date", "Due date", FieldKind::Date),
];

const MESSAGE_FORM: &[FieldSpec] = &[
    FieldSpec::required("recipient", "Recipient username", FieldKind::Text),
    FieldSpec::required("content", "Message", FieldKind::TextArea),
];

pub(crate) const SALARY_FORM: &[FieldSpec] = &[
    FieldSpec::required("employee", "Employee", FieldKind::UserPicker),
    FieldSpec::required("basic_salary", "Basic salary", FieldKind::Decimal),
    FieldSpec::required("bonuses", "Bonuses", FieldKind::Decimal).with_default("0.00"),
    FieldSpec::required("deductions", "Deductions", FieldKind::Decimal).with_default("0.00"),
    FieldSpec::required("date", "Date", FieldKind::Date),
];

pub const COMPLAINTS: ScreenSpec = ScreenSpec {
    destination: Destination::Complaints,
    title: "My Complaints",
    path: "complaints/",
    schema: COMPLAINT_FORM,
    submit_label: "Submit complaint",
    hidden_columns: &["Employee"],
    refresh: true,
    empty_text: "You have not filed any complaints.",
    load_failure: "Failed to fetch complaints.",
    create_success: "Complaint submitted successfully.",
    create_failure: "Failed to submit complaint.",
    ..BASE
};

pub const COMPLAINTS_ADMIN: ScreenSpec = ScreenSpec {
    destination: Destination::ComplaintsAdmin,
    title: "Complaints",
    path: "complaints/",
    row_action: RowAction::StatusSelect(ComplaintStatus::LABELS),
    quick_status: Some(QuickStatus {
        label: "Mark Resolved",
        status: "Resolved",
    }),
    refresh: true,
    needs_users: true,
    empty_text: "No complaints have been filed.",
    load_failure: "Failed to fetch complaints.",
    update_success: "Complaint status updated successfully.",
    update_failure: "Failed to update complaint status.",
    ..BASE
};

pub const ATTENDANCE: ScreenSpec = ScreenSpec {
    destination: Destination::Attendance,
    title: "My Attendance",
    path: "attendance/",
    schema: ATTENDANCE_FORM,
    submit_label: "Mark attendance",
    empty_text: "No attendance recorded yet.",
    load_failure: "Error fetching attendance records.",
    create_success: "Attendance marked successfully!",
    create_failure: "Error marking attendance.",
    ..BASE
};

pub const ATTENDANCE_ADMIN: ScreenSpec = ScreenSpec {
    destination: Destination::AttendanceAdmin,
    title: "Attendance",
    path: "attendance/",
    row_action: RowAction::StatusSelect(AttendanceStatus::LABELS),
    empty_text: "No attendance recorded yet.",
    load_failure: "Failed to fetch attendance records.",
    update_success: "Attendance status updated successfully.",
    update_failure: "Failed to update attendance status.",
    ..BASE
};

pub const TASKS: ScreenSpec = ScreenSpec {
    destination: Destination::Tasks,
    title: "My Tasks",
    path: "tasks/",
    row_action: RowAction::CompletionToggle,
    empty_text: "No tasks assigned to you.",
    load_failure: "Error fetching tasks.",
    update_success: "Task status updated.",
    update_failure: "Error updating task status.",
    ..BASE
};

pub const TASKS_ADMIN: ScreenSpec = ScreenSpec {
    destination: Destination::TasksAdmin,
    title: "Tasks",
    path: "tasks/",
    schema: TASK_FORM,
    submit_label: "Create task",
    needs_users: true,
    empty_text: "No tasks yet.",
    load_failure: "Error fetching tasks.",
    create_success: "Task created successfully.",
    create_failure: "Error creating task.",
    ..BASE
};

pub const MESSAGES: ScreenSpec = ScreenSpec {
    destination: Destination::Messages,
    title: "Messages",
    path: "messages/",
    schema: MESSAGE_FORM,
    submit_label: "Send",
    empty_text: "No messages yet.",
    load_failure: "Failed to fetch messages.",
    create_success: "Message sent successfully!",
    create_failure: "Failed to send message.",
    ..BASE
};

pub const MESSAGES_ADMIN: ScreenSpec = ScreenSpec {
    destination: Destination::MessagesAdmin,
    ..MESSAGES
};

pub const SALARY: ScreenSpec = ScreenSpec {
    destination: Destination::Salary,
    title: "My Salary",
    path: "salary/",
    empty_text: "No salary records yet.",
    load_failure: "Error fetching salary details.",
    ..BASE
};

pub const SALARY_ADMIN: ScreenSpec = ScreenSpec {
    destination: Destination::SalaryAdmin,
    title: "Salaries",
    path: "salary/",
    schema: SALARY_FORM,
    submit_label: "Assign salary",
    needs_users: true,
    net_preview: true,
    empty_text: "No salary records yet.",
    load_failure: "Error fetching salary details.",
    create_success: "Salary assigned successfully!",
    create_failure: "Failed to assign salary. Please try again.",
    ..BASE
};
