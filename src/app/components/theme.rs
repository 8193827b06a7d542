//! Light/dark theme switcher.

use dioxus::prelude::*;

/// localStorage key for the chosen theme
pub const THEME_KEY: &str = "staff-theme";

const THEMES: [(&str, &str); 2] = [("light", "Light"), ("dark", "Dark")];

/// Theme switcher. The choice is kept in localStorage and applied through
/// Pico's `data-theme` attribute.
#[component]
pub fn ThemeSwitcher() -> Element {
    let mut current_theme = use_signal(|| "light".to_string());

    // Load theme from localStorage on mount
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(Some(theme)) = storage.get_item(THEME_KEY) {
                        current_theme.set(theme);
                    }
                }
            }
        }
    });

    let mut set_theme = move |theme: &'static str| {
        current_theme.set(theme.to_string());

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Some(root) = window.document().and_then(|d| d.document_element()) {
                    let _ = root.set_attribute("data-theme", theme);
                }
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(THEME_KEY, theme);
                }
            }
        }
    };

    let theme = current_theme();

    rsx! {
        div { class: "theme-switcher",
            for (id, label) in THEMES {
                button {
                    id: "theme-{id}",
                    class: if theme == id { "active" } else { "" },
                    onclick: move |_| set_theme(id),
                    "{label}"
                }
            }
        }
    }
}

/// Client-side JavaScript for initial theme setup (included in head).
/// Runs immediately to prevent flash of wrong theme.
pub const THEME_SCRIPT: &str = r#"
(function(){
    const t = localStorage.getItem('staff-theme') || 'light';
    document.documentElement.setAttribute('data-theme', t);
})();
"#;
