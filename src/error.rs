//! Error taxonomy for calls to the backend.

use serde_json::Value;

/// Failure of one console operation.
///
/// Every variant is local to the request that produced it: screens show it
/// as a notification and keep their previous state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// A required form field was empty; nothing was sent
    #[error("{field} is required")]
    Validation { field: String },

    /// The token endpoint refused the credentials
    #[error("invalid credentials")]
    InvalidCredentials,

    /// 401/403 on an authenticated request: the token is missing, expired or
    /// not allowed to do this
    #[error("not authorized (HTTP {status})")]
    Unauthorized { status: u16 },

    /// Any other non-2xx response
    #[error("request rejected (HTTP {status})")]
    Rejected {
        status: u16,
        detail: Option<String>,
    },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// 2xx with a body that did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    /// A write is already outstanding on this screen
    #[error("another request is still in flight")]
    Busy,
}

impl ApiError {
    /// Map a non-2xx status and its body to an error.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized { status },
            _ => ApiError::Rejected {
                status,
                detail: extract_detail(body),
            },
        }
    }

    /// True when the session should be dropped and the user sent to login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// One sentence suitable for a notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation { field } => format!("{} is required.", field),
            ApiError::InvalidCredentials => "Invalid credentials".to_string(),
            ApiError::Unauthorized { status: 403 } => {
                "You are not allowed to do that. Please sign in again.".to_string()
            }
            ApiError::Unauthorized { .. } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Rejected { status, .. } if *status >= 500 => {
                "The server failed to handle the request. Please try again.".to_string()
            }
            ApiError::Rejected { .. } => "The request was rejected.".to_string(),
            ApiError::Transport(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Busy => "Please wait for the previous request to finish.".to_string(),
        }
    }
}

/// Pull a human message out of a REST error body.
///
/// Recognises `{"detail": ..}`, `{"error": ..}`, `{"non_field_errors": [..]}`
/// and field error maps such as `{"due_date": ["Due date cannot be in the past."]}`.
fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match &value {
        Value::String(s) => non_empty(s),
        Value::Array(items) => items.iter().find_map(first_text),
        Value::Object(map) => ["detail", "error", "non_field_errors"]
            .iter()
            .find_map(|key| map.get(*key).and_then(first_text))
            .or_else(|| map.values().find_map(first_text)),
        _ => None,
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
