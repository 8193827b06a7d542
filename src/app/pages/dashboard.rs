//! Landing pages for each role.

use dioxus::prelude::*;
use staff_records::Role;

use crate::app::components::Head;
use crate::app::Route;
use crate::router::Destination;

fn blurb(destination: Destination) -> &'static str {
    match destination {
        Destination::Complaints => "File a complaint and follow its status.",
        Destination::Attendance => "Mark today's attendance and review past days.",
        Destination::Tasks => "See your tasks and mark them done.",
        Destination::Messages | Destination::MessagesAdmin => "Send and read messages.",
        Destination::Salary => "Review your salary statements.",
        Destination::ComplaintsAdmin => "Review complaints and set their status.",
        Destination::AttendanceAdmin => "Review and correct attendance marks.",
        Destination::TasksAdmin => "Create tasks and assign them to employees.",
        Destination::SalaryAdmin => "Assign salaries and review statements.",
        Destination::Login | Destination::EmployeeDashboard | Destination::AdminDashboard => "",
    }
}

#[component]
fn ScreenCards(role: Role) -> Element {
    rsx! {
        div { class: "screen-grid",
            for dest in Destination::screens_for(role) {
                article {
                    header { strong { {dest.label()} } }
                    p { {blurb(dest)} }
                    Link { to: Route::from(dest), "Open" }
                }
            }
        }
    }
}

#[component]
pub fn EmployeeDashboard() -> Element {
    rsx! {
        Head { title: "Employee Dashboard".to_string() }
        h1 { "Employee Dashboard" }
        ScreenCards { role: Role::Employee }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        Head { title: "Admin Dashboard".to_string() }
        h1 { "Admin Dashboard" }
        ScreenCards { role: Role::Admin }
    }
}
