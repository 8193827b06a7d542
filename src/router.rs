//! Role router: which views the current session may see.
//!
//! The role comes from the token endpoint and is cached on the client, so
//! everything here is a convenience for the UI. The backend still decides
//! what each request may do, and a 401/403 from it sends the user back to
//! the login screen whatever role the client believes it has.

use staff_records::Role;

use crate::session::Session;

/// Where the console is in the sign-in lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Unauthenticated,
    Authenticated(Role),
}

impl AuthStatus {
    pub fn from_session(session: &Session) -> Self {
        match (&session.token, session.role) {
            (Some(_), Some(role)) => AuthStatus::Authenticated(role),
            _ => AuthStatus::Unauthenticated,
        }
    }

    pub fn role(self) -> Option<Role> {
        match self {
            AuthStatus::Authenticated(role) => Some(role),
            AuthStatus::Unauthenticated => None,
        }
    }

    pub fn on_login(self, role: Role) -> Self {
        AuthStatus::Authenticated(role)
    }

    pub fn on_logout(self) -> Self {
        AuthStatus::Unauthenticated
    }

    /// The backend refused the token: treat it as a logout.
    pub fn on_auth_failure(self) -> Self {
        AuthStatus::Unauthenticated
    }
}

/// Who a view is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Public,
    Employee,
    Admin,
}

impl Audience {
    fn admits(self, role: Role) -> bool {
        match self {
            Audience::Public => true,
            Audience::Employee => role == Role::Employee,
            Audience::Admin => role == Role::Admin,
        }
    }
}

/// Every view in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Login,
    EmployeeDashboard,
    AdminDashboard,
    Complaints,
    Attendance,
    Tasks,
    Messages,
    Salary,
    ComplaintsAdmin,
    AttendanceAdmin,
    TasksAdmin,
    MessagesAdmin,
    SalaryAdmin,
}

impl Destination {
    pub const EMPLOYEE_SCREENS: [Destination; 5] = [
        Destination::Complaints,
        Destination::Attendance,
        Destination::Tasks,
        Destination::Messages,
        Destination::Salary,
    ];

    pub const ADMIN_SCREENS: [Destination; 5] = [
        Destination::ComplaintsAdmin,
        Destination::AttendanceAdmin,
        Destination::TasksAdmin,
        Destination::MessagesAdmin,
        Destination::SalaryAdmin,
    ];

    pub fn audience(self) -> Audience {
        match self {
            Destination::Login => Audience::Public,
            Destination::EmployeeDashboard
            | Destination::Complaints
            | Destination::Attendance
            | Destination::Tasks
            | Destination::Messages
            | Destination::Salary => Audience::Employee,
            Destination::AdminDashboard
            | Destination::ComplaintsAdmin
            | Destination::AttendanceAdmin
            | Destination::TasksAdmin
            | Destination::MessagesAdmin
            | Destination::SalaryAdmin => Audience::Admin,
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Destination::Login => "Login",
            Destination::EmployeeDashboard | Destination::AdminDashboard => "Dashboard",
            Destination::Complaints | Destination::ComplaintsAdmin => "Complaints",
            Destination::Attendance | Destination::AttendanceAdmin => "Attendance",
            Destination::Tasks | Destination::TasksAdmin => "Tasks",
            Destination::Messages | Destination::MessagesAdmin => "Messages",
            Destination::Salary | Destination::SalaryAdmin => "Salary",
        }
    }

    /// Screens listed in the navigation for `role`.
    pub fn screens_for(role: Role) -> [Destination; 5] {
        match role {
            Role::Employee => Self::EMPLOYEE_SCREENS,
            Role::Admin => Self::ADMIN_SCREENS,
        }
    }
}

/// Landing view after a successful login.
pub fn entry_for(role: Role) -> Destination {
    match role {
        Role::Employee => Destination::EmployeeDashboard,
        Role::Admin => Destination::AdminDashboard,
    }
}

/// Outcome of checking a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Destination),
}

/// Decide whether `status` may view `destination`.
///
/// - signed out: only the login screen; everything else goes to login
/// - signed in on the login screen: straight to the role's dashboard
/// - a view for the other role: the role's own dashboard
pub fn guard(status: AuthStatus, destination: Destination) -> Access {
    match (status, destination.audience()) {
        (AuthStatus::Unauthenticated, Audience::Public) => Access::Allow,
        (AuthStatus::Unauthenticated, _) => Access::Redirect(Destination::Login),
        (AuthStatus::Authenticated(role), _) if destination == Destination::Login => {
            Access::Redirect(entry_for(role))
        }
        (AuthStatus::Authenticated(role), audience) if audience.admits(role) => Access::Allow,
        (AuthStatus::Authenticated(role), _) => Access::Redirect(entry_for(role)),
    }
}
