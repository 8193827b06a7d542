//! Page components, one per route.

mod dashboard;
mod login;
mod not_found;
mod resource;
mod screens;

pub use dashboard::{AdminDashboard, EmployeeDashboard};
pub use login::Login;
pub use not_found::NotFound;
pub use screens::{
    Attendance, AttendanceAdmin, Complaints, ComplaintsAdmin, Messages, MessagesAdmin, Salary,
    SalaryAdmin, Tasks, TasksAdmin,
};
