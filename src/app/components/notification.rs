//! Notification banner and its auto-dismiss timer.

use dioxus::prelude::*;

use crate::app::timer::sleep_ms;
use crate::screen::{NoticeKind, Notices, Notification};

/// Shows the current notification, if any, with a close button.
#[component]
pub fn NotificationBanner(notice: Option<Notification>, on_close: EventHandler<()>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };
    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    };

    rsx! {
        article { class: "{class}", role: "status",
            span { "{notice.message}" }
            button {
                class: "secondary outline",
                aria_label: "Close",
                onclick: move |_| on_close.call(()),
                "×"
            }
        }
    }
}

/// Close each notification `timeout_ms` after it appears.
///
/// One timer per notification; a timer that fires after a newer
/// notification replaced its own leaves the newer one alone.
pub fn use_auto_dismiss<S: Notices + 'static>(mut state: Signal<S>, timeout_ms: u64) {
    let showing = use_memo(move || state.read().notices().current().map(|n| n.seq));

    use_effect(move || {
        if let Some(seq) = showing() {
            spawn(async move {
                sleep_ms(timeout_ms).await;
                state.write().notices_mut().expire(seq);
            });
        }
    });
}
