//! Sign-in page.

use dioxus::prelude::*;
use staff_records::Role;

use crate::app::components::{use_auto_dismiss, Head, NotificationBanner, Redirect};
use crate::app::{use_app, use_auth, Route};
use crate::auth::{Authenticator, Credentials};
use crate::error::ApiError;
use crate::router::entry_for;
use crate::screen::{Notices, NotificationSlot};

/// Progress of the current sign-in attempt.
#[derive(Debug, Clone, Default, PartialEq)]
struct LoginState {
    notice: NotificationSlot,
    pending: bool,
}

impl LoginState {
    /// Claim the attempt, or `false` if one is already running.
    fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.notice.dismiss();
        true
    }

    fn finish(&mut self, result: &Result<Role, ApiError>) {
        self.pending = false;
        if let Err(err) = result {
            self.notice.error(err.user_message());
        }
    }
}

impl Notices for LoginState {
    fn notices(&self) -> &NotificationSlot {
        &self.notice
    }

    fn notices_mut(&mut self) -> &mut NotificationSlot {
        &mut self.notice
    }
}

#[component]
pub fn Login() -> Element {
    let ctx = use_app();
    let mut auth = use_auth();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut state = use_signal(LoginState::default);

    use_auto_dismiss(state, ctx.config.notification_ms);

    if let Some(role) = auth.status().role() {
        return rsx! {
            Redirect { to: Route::from(entry_for(role)) }
        };
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !state.write().begin() {
            return;
        }
        let credentials = Credentials::new(username(), password());
        let authenticator = Authenticator::new(ctx.client.clone());

        spawn(async move {
            let result = authenticator.login(&credentials).await;
            state.write().finish(&result);
            if let Ok(role) = result {
                password.set(String::new());
                auth.signed_in(role);
                nav.replace(Route::from(entry_for(role)));
            }
        });
    };

    let current = state.read().clone();
    let pending = current.pending;

    rsx! {
        Head { title: "Sign in".to_string() }
        main { class: "container",
            article { style: "max-width: 420px; margin: 4rem auto;",
                header {
                    h2 { style: "margin-bottom: 0;", "Staff Console" }
                    small { "Sign in with your staff account" }
                }
                NotificationBanner {
                    notice: current.notice.current().cloned(),
                    on_close: move |_| state.write().notice.dismiss(),
                }
                form { onsubmit,
                    label {
                        "Username"
                        input {
                            r#type: "text",
                            name: "username",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    label {
                        "Password"
                        input {
                            r#type: "password",
                            name: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: pending,
                        aria_busy: if pending { "true" } else { "false" },
                        if pending { "Signing in…" } else { "Login" }
                    }
                }
            }
        }
    }
}
