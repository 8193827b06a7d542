//! Screen state and the request drivers that mutate it.
//!
//! Every feature screen follows the same lifecycle: fetch the collection,
//! optionally create or update one record, then fetch the collection again
//! so the list always reflects what the server stored. The drivers below are
//! the only code that talks to the API on behalf of a screen; the Dioxus
//! pages and the tests both go through them.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use staff_records::UserSummary;
use tracing::debug;

use super::form::{FieldSpec, FormState};
use super::notify::{Notices, NotificationSlot};
use crate::client::ApiClient;
use crate::error::ApiError;

/// Path of the directory used by user pickers
pub const USERS_PATH: &str = "users/";

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState<R> {
    /// Last list the server returned
    pub items: Vec<R>,
    /// User directory, for screens with a user picker
    pub users: Vec<UserSummary>,
    pub form: FormState,
    pub notice: NotificationSlot,
    pub loading: bool,
    /// Bumped for every fetch; only the newest fetch may replace `items`
    pub load_generation: u64,
    /// A write is outstanding
    pub submitting: bool,
    /// The backend refused the token
    pub session_expired: bool,
}

impl<R> ScreenState<R> {
    pub fn new(schema: &[FieldSpec]) -> Self {
        Self {
            items: Vec::new(),
            users: Vec::new(),
            form: FormState::new(schema),
            notice: NotificationSlot::default(),
            loading: false,
            load_generation: 0,
            submitting: false,
            session_expired: false,
        }
    }

    /// Claim the write slot, or refuse if a write is already outstanding.
    fn begin_write(&mut self) -> Result<(), ApiError> {
        if self.submitting {
            return Err(ApiError::Busy);
        }
        self.submitting = true;
        Ok(())
    }

    fn fail(&mut self, context: &str, err: &ApiError) {
        let message = if err.is_auth_failure() {
            self.session_expired = true;
            err.user_message()
        } else if matches!(err, ApiError::Validation { .. } | ApiError::Busy) {
            err.user_message()
        } else {
            format!("{} {}", context, err.user_message())
        };
        self.notice.error(message);
    }
}

impl<R> Notices for ScreenState<R> {
    fn notices(&self) -> &NotificationSlot {
        &self.notice
    }

    fn notices_mut(&mut self) -> &mut NotificationSlot {
        &mut self.notice
    }
}

impl<R> Default for ScreenState<R> {
    fn default() -> Self {
        Self::new(&[])
    }
}

/// Somewhere a [`ScreenState`] lives.
///
/// Plain values are used in tests; the UI keeps its state in a signal so
/// every change re-renders the page.
pub trait ScreenCell<R> {
    fn modify<T>(&mut self, f: impl FnOnce(&mut ScreenState<R>) -> T) -> T;
}

impl<R> ScreenCell<R> for ScreenState<R> {
    fn modify<T>(&mut self, f: impl FnOnce(&mut ScreenState<R>) -> T) -> T {
        f(self)
    }
}

impl<R: 'static> ScreenCell<R> for Signal<ScreenState<R>> {
    fn modify<T>(&mut self, f: impl FnOnce(&mut ScreenState<R>) -> T) -> T {
        let mut state = self.write();
        f(&mut state)
    }
}

/// Notification text for one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wording<'a> {
    /// Prefix for a failed list fetch
    pub load_failure: &'a str,
    pub success: &'a str,
    /// Prefix for a failed write
    pub failure: &'a str,
}

/// `{collection}{id}/`
pub fn member_path(collection: &str, id: i64) -> String {
    format!("{}{}/", collection, id)
}

/// Fetch the collection at `path`.
///
/// On success the list is replaced wholesale. On failure the previous items
/// stay on screen and a single error notification is shown. A response that
/// arrives after a newer fetch was started is dropped.
pub async fn load<R, C>(
    client: &ApiClient,
    path: &str,
    cell: &mut C,
    wording: Wording<'_>,
) -> Result<(), ApiError>
where
    R: DeserializeOwned,
    C: ScreenCell<R>,
{
    let generation = cell.modify(|s| {
        s.loading = true;
        s.load_generation += 1;
        s.load_generation
    });
    let result = client.get::<Vec<R>>(path).await;
    cell.modify(|s| {
        if generation != s.load_generation {
            debug!(path, generation, latest = s.load_generation, "Dropped stale list");
            return Ok(());
        }
        s.loading = false;
        match result {
            Ok(items) => {
                debug!(path, count = items.len(), "Loaded collection");
                s.items = items;
                Ok(())
            }
            Err(err) => {
                s.fail(wording.load_failure, &err);
                Err(err)
            }
        }
    })
}

/// Fetch the user directory for pickers and name columns.
pub async fn load_users<R, C>(client: &ApiClient, cell: &mut C) -> Result<(), ApiError>
where
    C: ScreenCell<R>,
{
    let result = client.get::<Vec<UserSummary>>(USERS_PATH).await;
    cell.modify(|s| match result {
        Ok(users) => {
            s.users = users;
            Ok(())
        }
        Err(err) => {
            s.fail("Error fetching users.", &err);
            Err(err)
        }
    })
}

/// Validate the form and create a record at `path`.
///
/// Nothing is sent when a required field is blank or another write is still
/// outstanding. After the server accepts the record the form is cleared and
/// the collection is fetched again; an error from that reload means the
/// record itself was stored.
pub async fn submit<R, C>(
    client: &ApiClient,
    path: &str,
    schema: &[FieldSpec],
    cell: &mut C,
    wording: Wording<'_>,
) -> Result<(), ApiError>
where
    R: DeserializeOwned,
    C: ScreenCell<R>,
{
    let body = cell.modify(|s| {
        if s.submitting {
            return Err(ApiError::Busy);
        }
        if let Err(err) = s.form.validate(schema) {
            s.fail(wording.failure, &err);
            return Err(err);
        }
        s.begin_write()?;
        Ok(s.form.to_body(schema))
    })?;

    let result = client.post_unit(path, &body).await;
    cell.modify(|s| {
        s.submitting = false;
        match result {
            Ok(()) => {
                s.form.reset(schema);
                s.notice.success(wording.success);
                Ok(())
            }
            Err(err) => {
                s.fail(wording.failure, &err);
                Err(err)
            }
        }
    })?;

    load(client, path, cell, wording).await
}

/// `PATCH {path}{id}/` with `body`, then reload the collection.
pub async fn update<R, C, B>(
    client: &ApiClient,
    path: &str,
    id: i64,
    body: &B,
    cell: &mut C,
    wording: Wording<'_>,
) -> Result<(), ApiError>
where
    R: DeserializeOwned,
    C: ScreenCell<R>,
    B: Serialize + ?Sized,
{
    cell.modify(|s| s.begin_write())?;

    let result = client.patch_unit(&member_path(path, id), body).await;
    cell.modify(|s| {
        s.submitting = false;
        match result {
            Ok(()) => {
                s.notice.success(wording.success);
                Ok(())
            }
            Err(err) => {
                s.fail(wording.failure, &err);
                Err(err)
            }
        }
    })?;

    load(client, path, cell, wording).await
}
