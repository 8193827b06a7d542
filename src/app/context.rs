//! Shared state handed to every page through the Dioxus context.

use dioxus::prelude::*;
use staff_records::Role;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::config::{load_config, ConsoleConfig};
use crate::router::AuthStatus;
use crate::session::SessionContext;

/// Configuration, session and API client for the running console.
#[derive(Clone)]
pub struct AppContext {
    pub config: ConsoleConfig,
    pub session: SessionContext,
    pub client: ApiClient,
}

impl AppContext {
    pub fn new(config: ConsoleConfig, session: SessionContext) -> Self {
        let client = ApiClient::from_config(&config, session.clone());
        Self {
            config,
            session,
            client,
        }
    }

    /// Platform session store plus whatever configuration loads; a broken
    /// config falls back to the defaults rather than a blank window.
    pub fn from_environment() -> Self {
        let config = load_config().unwrap_or_else(|e| {
            warn!("Failed to load configuration: {:#}. Using defaults.", e);
            ConsoleConfig::default()
        });
        info!(api = %config.api_base_url, "Console configured");
        Self::new(config, SessionContext::platform())
    }
}

/// Reactive sign-in status.
///
/// The session store is the source of truth; this signal mirrors it so the
/// navigation and route guard re-render when it changes.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    status: Signal<AuthStatus>,
}

impl AuthState {
    pub fn status(&self) -> AuthStatus {
        (self.status)()
    }

    pub fn signed_in(&mut self, role: Role) {
        let next = self.status.peek().on_login(role);
        self.status.set(next);
    }

    pub fn signed_out(&mut self) {
        let next = self.status.peek().on_logout();
        self.status.set(next);
    }

    /// The backend refused the token.
    pub fn expired(&mut self) {
        let next = self.status.peek().on_auth_failure();
        self.status.set(next);
    }
}

/// Install [`AppContext`] and [`AuthState`] for the component tree.
pub fn use_app_provider() -> AppContext {
    let ctx = use_context_provider(AppContext::from_environment);
    let initial = AuthStatus::from_session(&ctx.session.get());
    let status = use_signal(move || initial);
    use_context_provider(move || AuthState { status });
    ctx
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
