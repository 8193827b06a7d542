//! API gateway client.
//!
//! One outbound client for the whole console. It joins every path onto the
//! configured API root, attaches the session's bearer token when there is
//! one, and hands failures back to the caller untouched: no retries, no
//! re-authentication, no session changes.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use staff_records::TokenRequest;
use tracing::{debug, warn};
use url::Url;

use crate::config::ConsoleConfig;
use crate::error::ApiError;
use crate::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// A fully resolved request, ready for a transport.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Raw response: status and body bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever came back.
///
/// Transports only fail for requests that got no response at all; status
/// codes are interpreted by [`ApiClient`].
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Transport backed by `reqwest` (browser `fetch` on wasm32).
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder.build().unwrap_or_else(|e| {
            warn!(
                "Failed to build HTTP client with custom config: {}. Using default.",
                e
            );
            reqwest::Client::default()
        });
        Self { client }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(request.url),
            Method::Post => self.client.post(request.url),
            Method::Patch => self.client.patch(request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// The console's single outbound HTTP client.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    session: SessionContext,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base: Url, session: SessionContext, transport: impl HttpTransport + 'static) -> Self {
        Self {
            base,
            session,
            transport: Rc::new(transport),
        }
    }

    pub fn from_config(config: &ConsoleConfig, session: SessionContext) -> Self {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        Self::new(
            config.api_base_url.clone(),
            session,
            ReqwestTransport::new(timeout),
        )
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Resolve `path` (e.g. `"complaints/"` or `"/salary/"`) under the API root.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Transport(format!("invalid request path {:?}: {}", path, e)))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.dispatch(Method::Get, path, None).await?;
        decode(&response)
    }

    /// POST whose response body is not needed.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.dispatch(Method::Post, path, Some(encode(body)?))
            .await
            .map(|_| ())
    }

    /// PATCH whose response body is not needed.
    pub async fn patch_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.dispatch(Method::Patch, path, Some(encode(body)?))
            .await
            .map(|_| ())
    }

    /// `POST token/` without a bearer header. The raw response is returned
    /// so the authenticator can decide how to report a refusal.
    pub async fn request_token(&self, credentials: &TokenRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url("token/")?;
        let request = ApiRequest {
            method: Method::Post,
            url,
            bearer: None,
            body: Some(encode(credentials)?),
        };
        debug!(username = %credentials.username, "Requesting token");
        self.transport.send(request).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.url(path)?;
        let bearer = self.session.token();

        debug!(
            method = method.as_str(),
            path,
            with_token = bearer.is_some(),
            "API request"
        );

        let request = ApiRequest {
            method,
            url,
            bearer,
            body,
        };
        let response = self.transport.send(request).await.map_err(|e| {
            warn!(method = method.as_str(), path, error = %e, "API request failed");
            e
        })?;

        if response.is_success() {
            Ok(response)
        } else {
            let err = ApiError::from_status(response.status, &response.body);
            warn!(
                method = method.as_str(),
                path,
                status = response.status,
                "API request rejected"
            );
            Err(err)
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(format!("could not encode request: {}", e)))
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::testing::client_with;
    use super::*;
    use serde_json::json;
    use staff_records::{Complaint, Role};

    #[tokio::test]
    async fn test_attaches_bearer_when_signed_in() {
        let session = SessionContext::in_memory();
        session.set("tok1", Role::Employee);
        let (client, transport) = client_with(session);
        transport.push_json(200, json!([]));

        let _: Vec<Complaint> = client.get("complaints/").await.unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].bearer.as_deref(), Some("tok1"));
        assert_eq!(requests[0].url.as_str(), "http://backend.test/api/complaints/");
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let (client, transport) = client_with(SessionContext::in_memory());
        transport.push_json(401, json!({"detail": "Authentication credentials were not provided."}));

        let err = client.get::<Vec<Complaint>>("complaints/").await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized { status: 401 });
        assert_eq!(transport.requests.borrow()[0].bearer, None);
    }

    #[tokio::test]
    async fn test_leading_slash_stays_under_api_root() {
        let (client, transport) = client_with(SessionContext::in_memory());
        transport.push_json(200, json!([]));

        let _: Vec<Value> = client.get("/salary/").await.unwrap();
        assert_eq!(
            transport.requests.borrow()[0].url.as_str(),
            "http://backend.test/api/salary/"
        );
    }

    #[tokio::test]
    async fn test_rejection_surfaces_detail_and_keeps_session() {
        let session = SessionContext::in_memory();
        session.set("tok1", Role::Employee);
        let (client, transport) = client_with(session.clone());
        transport.push_json(400, json!({"status": ["\"Later\" is not a valid choice."]}));

        let err = client
            .patch_unit("complaints/3/", &json!({"status": "Later"}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 400,
                detail: Some("\"Later\" is not a valid choice.".into()),
            }
        );
        assert!(session.get().is_authenticated());
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let (client, transport) = client_with(SessionContext::in_memory());
        transport.push_err(ApiError::Transport("connection refused".into()));

        let err = client.get::<Vec<Value>>("tasks/").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(transport.requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_token_request_never_carries_bearer() {
        let session = SessionContext::in_memory();
        session.set("old", Role::Admin);
        let (client, transport) = client_with(session);
        transport.push_json(200, json!({"access": "new", "role": "admin"}));

        let credentials = TokenRequest {
            username: "root".into(),
            password: "pw".into(),
        };
        client.request_token(&credentials).await.unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].bearer, None);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url.as_str(), "http://backend.test/api/token/");
    }

    #[tokio::test]
    async fn test_decode_failure_on_success_status() {
        let (client, transport) = client_with(SessionContext::in_memory());
        transport.push_json(200, json!({"unexpected": true}));

        let err = client.get::<Vec<Complaint>>("complaints/").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
