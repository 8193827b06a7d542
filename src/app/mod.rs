//! Dioxus application entry point.
//!
//! This module provides the root App component, the route table and the
//! mapping between routes and the role router's destinations.

use dioxus::prelude::*;

pub mod components;
pub mod context;
pub mod pages;
pub mod timer;

pub use context::{use_app, use_auth, AppContext, AuthState};

use crate::router::Destination;
use components::Shell;
use pages::{
    AdminDashboard, Attendance, AttendanceAdmin, Complaints, ComplaintsAdmin, EmployeeDashboard,
    Login, Messages, MessagesAdmin, NotFound, Salary, SalaryAdmin, Tasks, TasksAdmin,
};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Session, client and auth status for every page
    context::use_app_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},
    #[layout(Shell)]
        #[route("/employee-dashboard")]
        EmployeeDashboard {},
        #[route("/admin-dashboard")]
        AdminDashboard {},
        #[route("/complaints")]
        Complaints {},
        #[route("/attendance")]
        Attendance {},
        #[route("/tasks")]
        Tasks {},
        #[route("/messages")]
        Messages {},
        #[route("/salary")]
        Salary {},
        #[route("/complaintsAdmin")]
        ComplaintsAdmin {},
        #[route("/attendanceAdmin")]
        AttendanceAdmin {},
        #[route("/tasksAdmin")]
        TasksAdmin {},
        #[route("/messagesAdmin")]
        MessagesAdmin {},
        #[route("/salaryAdmin")]
        SalaryAdmin {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The view this route shows, if it is one the router guards.
    pub fn destination(&self) -> Option<Destination> {
        Some(match self {
            Route::Login {} => Destination::Login,
            Route::EmployeeDashboard {} => Destination::EmployeeDashboard,
            Route::AdminDashboard {} => Destination::AdminDashboard,
            Route::Complaints {} => Destination::Complaints,
            Route::Attendance {} => Destination::Attendance,
            Route::Tasks {} => Destination::Tasks,
            Route::Messages {} => Destination::Messages,
            Route::Salary {} => Destination::Salary,
            Route::ComplaintsAdmin {} => Destination::ComplaintsAdmin,
            Route::AttendanceAdmin {} => Destination::AttendanceAdmin,
            Route::TasksAdmin {} => Destination::TasksAdmin,
            Route::MessagesAdmin {} => Destination::MessagesAdmin,
            Route::SalaryAdmin {} => Destination::SalaryAdmin,
            Route::NotFound { .. } => return None,
        })
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::EmployeeDashboard => Route::EmployeeDashboard {},
            Destination::AdminDashboard => Route::AdminDashboard {},
            Destination::Complaints => Route::Complaints {},
            Destination::Attendance => Route::Attendance {},
            Destination::Tasks => Route::Tasks {},
            Destination::Messages => Route::Messages {},
            Destination::Salary => Route::Salary {},
            Destination::ComplaintsAdmin => Route::ComplaintsAdmin {},
            Destination::AttendanceAdmin => Route::AttendanceAdmin {},
            Destination::TasksAdmin => Route::TasksAdmin {},
            Destination::MessagesAdmin => Route::MessagesAdmin {},
            Destination::SalaryAdmin => Route::SalaryAdmin {},
        }
    }
}
