//! In-memory stand-in for the staff records backend.
//!
//! Implements just enough of the REST API to drive the console end to end:
//! token exchange, bearer checks, complaints (with admin-only status
//! changes), attendance (one mark per employee per day), tasks (no past due
//! dates), messages addressed by username, salaries with a server-computed
//! net figure, and the user list.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};
use staff_records::Amount;
use staff_console::client::{ApiClient, ApiRequest, ApiResponse, HttpTransport, Method};
use staff_console::session::SessionContext;
use staff_console::ApiError;
use url::Url;

pub const BASE: &str = "http://backend.test/api/";
pub const TODAY: &str = "2024-06-03";

struct Account {
    id: i64,
    username: &'static str,
    password: &'static str,
    role: &'static str,
}

const ACCOUNTS: &[Account] = &[
    Account {
        id: 1,
        username: "root",
        password: "admin-pw",
        role: "admin",
    },
    Account {
        id: 4,
        username: "alice",
        password: "right",
        role: "employee",
    },
];

#[derive(Default)]
pub struct FakeBackend {
    pub requests: RefCell<Vec<ApiRequest>>,
    complaints: RefCell<Vec<Value>>,
    attendance: RefCell<Vec<Value>>,
    tasks: RefCell<Vec<Value>>,
    messages: RefCell<Vec<Value>>,
    salaries: RefCell<Vec<Value>>,
    next_id: RefCell<i64>,
}

fn account(id: &Value) -> Option<&'static Account> {
    ACCOUNTS.iter().find(|a| *id == a.id)
}

fn member_id(path: &str, collection: &str) -> Option<i64> {
    path.strip_prefix(collection)?
        .trim_end_matches('/')
        .parse()
        .ok()
}

fn amount(value: &Value) -> Amount {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or(Amount::ZERO)
}

fn forbidden() -> (u16, Value) {
    (
        403,
        json!({"detail": "You do not have permission to perform this action."}),
    )
}

impl FakeBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Requests seen since the last call.
    pub fn take_requests(&self) -> Vec<ApiRequest> {
        std::mem::take(&mut *self.requests.borrow_mut())
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.borrow_mut();
        *id += 1;
        *id
    }

    fn caller(&self, request: &ApiRequest) -> Option<&'static Account> {
        let token = request.bearer.as_deref()?;
        ACCOUNTS
            .iter()
            .find(|a| token == format!("access-{}", a.username))
    }

    /// Seed a task as if an admin had created it earlier.
    pub fn seed_task(&self, title: &str, assigned_to: i64, status: &str) -> i64 {
        let id = self.next_id();
        self.tasks.borrow_mut().push(json!({
            "id": id,
            "title": title,
            "description": "",
            "assigned_to": assigned_to,
            "assigned_to_username": account(&json!(assigned_to)).map(|a| a.username),
            "status": status,
            "priority": "Medium",
            "due_date": "2024-06-30",
            "completed": status == "Completed",
        }));
        id
    }

    fn handle(&self, request: &ApiRequest) -> (u16, Value) {
        let path = request
            .url
            .as_str()
            .strip_prefix(BASE)
            .unwrap_or_default()
            .to_string();

        if path == "token/" && request.method == Method::Post {
            let body = request.body.clone().unwrap_or_default();
            return match ACCOUNTS
                .iter()
                .find(|a| body["username"] == a.username && body["password"] == a.password)
            {
                Some(a) => (
                    200,
                    json!({
                        "refresh": format!("refresh-{}", a.username),
                        "access": format!("access-{}", a.username),
                        "role": a.role,
                    }),
                ),
                None => (401, json!({"error": "Invalid credentials"})),
            };
        }

        let Some(caller) = self.caller(request) else {
            return (
                401,
                json!({"detail": "Authentication credentials were not provided."}),
            );
        };
        let is_admin = caller.role == "admin";
        let body = request.body.clone().unwrap_or_default();

        match (request.method, path.as_str()) {
            (Method::Get, "users/") => (
                200,
                Value::Array(
                    ACCOUNTS
                        .iter()
                        .map(|a| json!({"id": a.id, "username": a.username}))
                        .collect(),
                ),
            ),
            (Method::Get, "complaints/") => {
                let all = self.complaints.borrow();
                let visible = all
                    .iter()
                    .filter(|c| is_admin || c["employee"] == caller.id)
                    .cloned()
                    .collect();
                (200, Value::Array(visible))
            }
            (Method::Post, "complaints/") => {
                let record = json!({
                    "id": self.next_id(),
                    "employee": caller.id,
                    "subject": body["subject"],
                    "description": body["description"],
                    "status": "Pending",
                    "created_at": "2024-06-03T09:30:00Z",
                });
                self.complaints.borrow_mut().push(record.clone());
                (201, record)
            }
            (Method::Patch, p) if p.starts_with("complaints/") => {
                if !is_admin {
                    return forbidden();
                }
                let id = member_id(p, "complaints/").unwrap_or_default();
                let mut all = self.complaints.borrow_mut();
                match all.iter_mut().find(|c| c["id"] == id) {
                    Some(c) => {
                        c["status"] = body["status"].clone();
                        (200, c.clone())
                    }
                    None => (404, json!({"detail": "Not found."})),
                }
            }
            (Method::Get, "attendance/") => {
                let all = self.attendance.borrow();
                let visible = all
                    .iter()
                    .filter(|r| is_admin || r["employee"] == caller.id)
                    .cloned()
                    .collect();
                (200, Value::Array(visible))
            }
            (Method::Post, "attendance/") => {
                let duplicate = self
                    .attendance
                    .borrow()
                    .iter()
                    .any(|r| r["employee"] == caller.id && r["date"] == TODAY);
                if duplicate {
                    return (
                        400,
                        json!({"non_field_errors": ["The fields employee, date must make a unique set."]}),
                    );
                }
                let record = json!({
                    "id": self.next_id(),
                    "employee": caller.id,
                    "employee_name": caller.username,
                    "date": TODAY,
                    "status": body["status"],
                });
                self.attendance.borrow_mut().push(record.clone());
                (201, record)
            }
            (Method::Get, "tasks/") => {
                let all = self.tasks.borrow();
                let visible = all
                    .iter()
                    .filter(|t| is_admin || t["assigned_to"] == caller.id)
                    .cloned()
                    .collect();
                (200, Value::Array(visible))
            }
            (Method::Post, "tasks/") => {
                if !is_admin {
                    return forbidden();
                }
                // ISO dates compare correctly as strings
                if body["due_date"].as_str().unwrap_or_default() < TODAY {
                    return (
                        400,
                        json!({"due_date": ["Due date cannot be in the past."]}),
                    );
                }
                let Some(assignee) = account(&body["assigned_to"]) else {
                    return (
                        400,
                        json!({"assigned_to": ["Invalid pk - object does not exist."]}),
                    );
                };
                let record = json!({
                    "id": self.next_id(),
                    "title": body["title"],
                    "description": body["description"],
                    "assigned_to": assignee.id,
                    "assigned_to_username": assignee.username,
                    "status": body["status"],
                    "priority": body["priority"],
                    "due_date": body["due_date"],
                    "completed": body["status"] == "Completed",
                });
                self.tasks.borrow_mut().push(record.clone());
                (201, record)
            }
            (Method::Patch, p) if p.starts_with("tasks/") => {
                let id = member_id(p, "tasks/").unwrap_or_default();
                let mut all = self.tasks.borrow_mut();
                match all.iter_mut().find(|t| t["id"] == id) {
                    Some(t) if is_admin || t["assigned_to"] == caller.id => {
                        t["status"] = body["status"].clone();
                        t["completed"] = json!(body["status"] == "Completed");
                        (200, t.clone())
                    }
                    Some(_) => forbidden(),
                    None => (404, json!({"detail": "Not found."})),
                }
            }
            (Method::Get, "messages/") => {
                let all = self.messages.borrow();
                let visible = all
                    .iter()
                    .filter(|m| m["sender"] == caller.username || m["recipient"] == caller.username)
                    .cloned()
                    .collect();
                (200, Value::Array(visible))
            }
            (Method::Post, "messages/") => {
                let Some(recipient) = ACCOUNTS.iter().find(|a| body["recipient"] == a.username)
                else {
                    return (400, json!({"error": "Recipient does not exist"}));
                };
                let record = json!({
                    "id": self.next_id(),
                    "sender": caller.username,
                    "recipient": recipient.username,
                    "timestamp": "2024-06-03T10:15:00Z",
                    "content": body["content"],
                });
                self.messages.borrow_mut().push(record.clone());
                (201, record)
            }
            (Method::Get, "salary/") => {
                let all = self.salaries.borrow();
                let visible = all
                    .iter()
                    .filter(|r| is_admin || r["employee"] == caller.id)
                    .cloned()
                    .collect();
                (200, Value::Array(visible))
            }
            (Method::Post, "salary/") => {
                if !is_admin {
                    return forbidden();
                }
                let Some(employee) = account(&body["employee"]) else {
                    return (
                        400,
                        json!({"employee": ["Invalid pk - object does not exist."]}),
                    );
                };
                let net = amount(&body["basic_salary"])
                    .checked_add(amount(&body["bonuses"]))
                    .and_then(|a| a.checked_sub(amount(&body["deductions"])))
                    .unwrap_or(Amount::ZERO);
                let record = json!({
                    "id": self.next_id(),
                    "employee": employee.id,
                    "employee_name": employee.username,
                    "basic_salary": body["basic_salary"],
                    "bonuses": body["bonuses"],
                    "deductions": body["deductions"],
                    "net_salary": net,
                    "date": body["date"],
                });
                self.salaries.borrow_mut().push(record.clone());
                (201, record)
            }
            _ => (404, json!({"detail": "Not found."})),
        }
    }
}

/// Transport handle onto a shared [`FakeBackend`].
pub struct FakeTransport(pub Rc<FakeBackend>);

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let (status, body) = self.0.handle(&request);
        self.0.requests.borrow_mut().push(request);
        Ok(ApiResponse {
            status,
            body: serde_json::to_vec(&body).unwrap(),
        })
    }
}

/// A signed-out console wired to a fresh backend.
pub fn console() -> (ApiClient, SessionContext, Rc<FakeBackend>) {
    let backend = FakeBackend::new();
    let session = SessionContext::in_memory();
    let client = ApiClient::new(
        Url::parse(BASE).unwrap(),
        session.clone(),
        FakeTransport(backend.clone()),
    );
    (client, session, backend)
}
