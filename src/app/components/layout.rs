//! Layout for signed-in pages, with the route guard in front of it.

use dioxus::prelude::*;

use super::nav::Nav;
use super::theme::{ThemeSwitcher, THEME_SCRIPT};
use crate::app::{use_auth, Route};
use crate::router::{guard, Access};

/// CSS styles for the application (extends Pico CSS).
pub const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.status-chip { display: inline-block; padding: 0.1rem 0.5rem; border-radius: 1rem; font-size: 0.8rem; }
.status-Pending, .status-Absent { background: var(--pico-mark-background-color); }
.status-Resolved, .status-Completed, .status-Present { background: var(--pico-ins-color); color: #fff; }
.status-Dismissed, .status-Cancelled { background: var(--pico-muted-border-color); }
.notice { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1rem; }
.notice-success { border-left: 4px solid var(--pico-ins-color); }
.notice-error { border-left: 4px solid var(--pico-del-color); }
.notice button { margin: 0; padding: 0.25rem 0.6rem; }
.screen-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.row-actions select, .row-actions button { margin: 0; padding: 0.25rem 0.5rem; }
.net-preview { font-weight: bold; }
small { color: var(--pico-muted-color); }
/* Theme switcher */
.theme-switcher { display: flex; gap: 0.25rem; }
.theme-switcher button { padding: 0.25rem 0.5rem; font-size: 0.8rem; margin: 0; }
.theme-switcher button.active { background: var(--pico-primary-background); color: var(--pico-primary-inverse); }
"#;

/// Head elements shared by every page.
#[component]
pub fn Head(title: String) -> Element {
    let full_title = format!("{} - Staff Console", title);

    rsx! {
        // Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }
    }
}

/// Replace the current route once mounted.
#[component]
pub fn Redirect(to: Route) -> Element {
    let nav = navigator();
    use_effect(move || {
        nav.replace(to.clone());
    });
    rsx! {}
}

/// Layout route for every signed-in page.
///
/// Runs the role guard on each navigation; signed-out visitors go to the
/// login screen and a role mismatch goes to the role's own dashboard.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let auth = use_auth();
    let status = auth.status();

    if let Some(destination) = route.destination() {
        if let Access::Redirect(to) = guard(status, destination) {
            return rsx! {
                Redirect { to: Route::from(to) }
            };
        }
    }
    let Some(role) = status.role() else {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    };

    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        header { class: "container",
            Nav { role }
        }
        main { class: "container",
            Outlet::<Route> {}
        }
        footer {
            class: "container",
            style: "display:flex;justify-content:space-between;align-items:center;",
            small { "Staff Console v{version}" }
            ThemeSwitcher {}
        }
    }
}
