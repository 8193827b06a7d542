//! Role-specific navigation bar.

use dioxus::prelude::*;
use staff_records::Role;

use crate::app::{use_app, use_auth, Route};
use crate::auth::Authenticator;
use crate::router::{entry_for, Destination};

/// Navigation bar: the role's five screens and a logout button.
#[component]
pub fn Nav(role: Role) -> Element {
    let ctx = use_app();
    let mut auth = use_auth();
    let nav = navigator();
    let current = use_route::<Route>();

    let logout = move |_| {
        Authenticator::new(ctx.client.clone()).logout();
        auth.signed_out();
        nav.replace(Route::Login {});
    };

    let link_class = |dest: Destination| {
        if current.destination() == Some(dest) {
            "contrast"
        } else {
            "secondary"
        }
    };

    let home = entry_for(role);
    let home_class = link_class(home);
    let links: Vec<(Destination, &str)> = Destination::screens_for(role)
        .into_iter()
        .map(|dest| (dest, link_class(dest)))
        .collect();

    rsx! {
        nav {
            ul {
                li {
                    Link { class: "{home_class}", to: Route::from(home),
                        strong { "Staff Console" }
                    }
                }
            }
            ul {
                for (dest, class) in links {
                    li {
                        Link { class: "{class}", to: Route::from(dest), {dest.label()} }
                    }
                }
                li {
                    button { class: "outline", onclick: logout, "Logout" }
                }
            }
        }
    }
}
