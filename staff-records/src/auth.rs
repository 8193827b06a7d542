//! Token exchange types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// Role claimed by the token endpoint.
///
/// The console only uses this to pick a dashboard; the backend decides what
/// each token may actually do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Role::Employee),
            "admin" => Ok(Role::Admin),
            other => Err(ParseError {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// Body for `POST token/`.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `POST token/` response.
///
/// The backend also returns a refresh token; the console never refreshes,
/// so it is accepted and ignored.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!("employee".parse::<Role>().unwrap(), Role::Employee);
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_token_response_with_refresh() {
        let json = r#"{"refresh":"r1","access":"tok1","role":"employee"}"#;
        let resp: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access, "tok1");
        assert_eq!(resp.role, Role::Employee);
    }

    #[test]
    fn test_token_response_rejects_unknown_role() {
        let json = r#"{"access":"tok1","role":"superuser"}"#;
        assert!(serde_json::from_str::<TokenResponse>(json).is_err());
    }

    #[test]
    fn test_debug_never_prints_secrets() {
        let req = TokenRequest {
            username: "alice".into(),
            password: "hunter2".into(),
        };
        let resp = TokenResponse {
            access: "tok1".into(),
            role: Role::Admin,
            refresh: None,
        };
        assert!(!format!("{:?}", req).contains("hunter2"));
        assert!(!format!("{:?}", resp).contains("tok1"));
    }
}
