//! The ten feature screens, one component each.

use dioxus::prelude::*;
use staff_records::{AttendanceRecord, Complaint, Message, SalaryRecord, Task};

use super::resource::resource_page;
use crate::screen::specs;

#[component]
pub fn Complaints() -> Element {
    resource_page::<Complaint>(&specs::COMPLAINTS)
}

#[component]
pub fn ComplaintsAdmin() -> Element {
    resource_page::<Complaint>(&specs::COMPLAINTS_ADMIN)
}

#[component]
pub fn Attendance() -> Element {
    resource_page::<AttendanceRecord>(&specs::ATTENDANCE)
}

#[component]
pub fn AttendanceAdmin() -> Element {
    resource_page::<AttendanceRecord>(&specs::ATTENDANCE_ADMIN)
}

#[component]
pub fn Tasks() -> Element {
    resource_page::<Task>(&specs::TASKS)
}

#[component]
pub fn TasksAdmin() -> Element {
    resource_page::<Task>(&specs::TASKS_ADMIN)
}

#[component]
pub fn Messages() -> Element {
    resource_page::<Message>(&specs::MESSAGES)
}

#[component]
pub fn MessagesAdmin() -> Element {
    resource_page::<Message>(&specs::MESSAGES_ADMIN)
}

#[component]
pub fn Salary() -> Element {
    resource_page::<SalaryRecord>(&specs::SALARY)
}

#[component]
pub fn SalaryAdmin() -> Element {
    resource_page::<SalaryRecord>(&specs::SALARY_ADMIN)
}
