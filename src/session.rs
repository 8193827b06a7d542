//! Session store: the token and role of whoever is signed in.
//!
//! The session is an explicit object handed to the API client, the
//! authenticator and the router. Browser builds persist it in
//! `localStorage`; tests and desktop builds keep it in memory.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use staff_records::Role;
use tracing::debug;

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key for the role claim
pub const ROLE_KEY: &str = "role";

/// Current token and role; both absent until a login succeeds.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    /// A token with a readable role. A token without a role (or with a role
    /// string this build does not understand) is treated as signed out.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.role.is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("role", &self.role)
            .finish()
    }
}

/// Durable storage for a [`Session`].
pub trait SessionStore {
    fn load(&self) -> Session;
    fn save(&self, token: &str, role: Role);
    fn clear(&self);
}

/// Session kept in process memory.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RefCell<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RefCell::new(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Session {
        self.session.borrow().clone()
    }

    fn save(&self, token: &str, role: Role) {
        *self.session.borrow_mut() = Session::new(token, role);
    }

    fn clear(&self) {
        *self.session.borrow_mut() = Session::default();
    }
}

/// Session persisted in the browser's `localStorage` under [`TOKEN_KEY`]
/// and [`ROLE_KEY`], so it survives reloads.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageSessionStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Session {
        let Some(storage) = Self::storage() else {
            return Session::default();
        };
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let role = storage
            .get_item(ROLE_KEY)
            .ok()
            .flatten()
            .and_then(|r| r.parse::<Role>().ok());
        Session { token, role }
    }

    fn save(&self, token: &str, role: Role) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(ROLE_KEY, role.as_str());
        } else {
            tracing::warn!("localStorage unavailable; session will not survive a reload");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(ROLE_KEY);
        }
    }
}

/// Shared handle to the session store.
///
/// Cloning is cheap; every clone sees the same store.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// In-memory session, initially signed out.
    pub fn in_memory() -> Self {
        Self::new(MemorySessionStore::new())
    }

    /// The platform's durable store: `localStorage` in the browser,
    /// memory elsewhere.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorageSessionStore)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    pub fn get(&self) -> Session {
        self.store.load()
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().token
    }

    pub fn set(&self, token: &str, role: Role) {
        debug!(%role, "Session established");
        self.store.save(token, role);
    }

    pub fn clear(&self) {
        debug!("Session cleared");
        self.store.clear();
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionContext").field(&self.get()).finish()
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}
