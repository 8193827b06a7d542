//! Wire types for the staff console REST backend.
//!
//! This crate defines the records exchanged between the console and the
//! backend API:
//! - [`auth`] - token exchange and roles
//! - [`complaint`], [`attendance`], [`task`], [`message`], [`salary`] - the
//!   five resource collections
//! - [`user`] - the user directory used by pickers
//! - [`amount`] - fixed-point money values as the backend formats them
//!
//! The console treats every record as an opaque DTO: the only client-side
//! invariant is that a record has an identifier ([`Record::id`]).

#[macro_use]
mod choice;

pub mod amount;
pub mod attendance;
pub mod auth;
pub mod complaint;
pub mod message;
pub mod salary;
pub mod task;
pub mod user;

pub use amount::Amount;
pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use auth::{Role, TokenRequest, TokenResponse};
pub use complaint::{Complaint, ComplaintStatus};
pub use message::Message;
pub use salary::SalaryRecord;
pub use task::{Task, TaskPriority, TaskStatus};
pub use user::UserSummary;

use serde::{Deserialize, Serialize};

/// A server-owned record with a stable identifier.
pub trait Record {
    fn id(&self) -> i64;
}

/// Body for a `PATCH {collection}/{id}/` that only changes the status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdate<S> {
    pub status: S,
}

impl<S> StatusUpdate<S> {
    pub fn new(status: S) -> Self {
        Self { status }
    }
}

/// Error returned when a string does not name a known choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}
