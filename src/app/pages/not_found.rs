use dioxus::prelude::*;

use crate::app::components::Head;
use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Head { title: "Not found".to_string() }
        main { class: "container",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Login {}, "Back to the console" }
        }
    }
}
