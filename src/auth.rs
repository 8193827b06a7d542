//! Authenticator: trades credentials for a token and role.
//!
//! This is the only place a session is created. A refused login leaves the
//! existing session exactly as it was.

use std::fmt;

use staff_records::{Role, TokenRequest, TokenResponse};
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Username and password for one login attempt.
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::Validation {
                field: "Username".to_string(),
            });
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation {
                field: "Password".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct Authenticator {
    client: ApiClient,
}

impl Authenticator {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and role are stored and the role is returned so
    /// the caller can route to the right dashboard. Any refusal from the
    /// token endpoint is reported as [`ApiError::InvalidCredentials`].
    pub async fn login(&self, credentials: &Credentials) -> Result<Role, ApiError> {
        credentials.validate()?;

        let request = TokenRequest {
            username: credentials.username.trim().to_string(),
            password: credentials.password.clone(),
        };
        let response = self.client.request_token(&request).await?;

        if !response.is_success() {
            warn!(
                username = %request.username,
                status = response.status,
                "Login refused"
            );
            return Err(ApiError::InvalidCredentials);
        }

        let token: TokenResponse = serde_json::from_slice(&response.body).map_err(|e| {
            warn!(error = %e, "Token response did not parse");
            ApiError::Decode(e.to_string())
        })?;
        if token.access.is_empty() {
            return Err(ApiError::Decode("empty access token".to_string()));
        }

        self.client.session().set(&token.access, token.role);
        info!(username = %request.username, role = %token.role, "Signed in");
        Ok(token.role)
    }

    /// Forget the current session.
    pub fn logout(&self) {
        self.client.session().clear();
        info!("Signed out");
    }
}
