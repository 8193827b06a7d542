//! Generic list-and-form page shared by all ten feature screens.
//!
//! Each screen is a [`ScreenSpec`] plus a record type; this module turns
//! the pair into hooks, a create form, a table and per-row actions. Every
//! request goes through the drivers in [`crate::screen`].

use dioxus::prelude::*;
use staff_records::{StatusUpdate, TaskStatus};
use tracing::debug;

use crate::app::components::{use_auto_dismiss, Head, NotificationBanner};
use crate::app::{use_app, use_auth, Route};
use crate::client::ApiClient;
use crate::screen::{
    self, headers, net_salary_preview, row_cells, FieldKind, FieldSpec, RowAction, ScreenRecord,
    ScreenSpec, ScreenState,
};

/// Render the screen described by `spec`. Call from a component body.
pub fn resource_page<R: ScreenRecord>(spec: &'static ScreenSpec) -> Element {
    let ctx = use_app();
    let mut auth = use_auth();
    let nav = navigator();
    let mut state = use_signal(|| ScreenState::<R>::new(spec.schema));

    use_auto_dismiss(state, ctx.config.notification_ms);

    // Initial fetch, once per mount
    let client = ctx.client.clone();
    use_hook(move || {
        spawn(async move {
            let mut items = state;
            let mut users = state;
            let list = screen::load(&client, spec.path, &mut items, spec.create_wording());
            if spec.needs_users {
                let _ = futures::join!(list, screen::load_users::<R, _>(&client, &mut users));
            } else {
                let _ = list.await;
            }
        })
    });

    // A refused token ends the session
    let session = ctx.session.clone();
    use_effect(move || {
        if state.read().session_expired {
            session.clear();
            auth.expired();
            nav.replace(Route::Login {});
        }
    });

    let current = state.read().clone();
    let notice = current.notice.current().cloned();
    let has_actions = spec.row_action != RowAction::None || spec.quick_status.is_some();
    let columns = headers::<R>(spec);
    let status_column = columns.iter().position(|c| *c == "Status");

    let refresh_client = ctx.client.clone();
    let on_refresh = move |_: MouseEvent| {
        let client = refresh_client.clone();
        spawn(async move {
            let mut cell = state;
            if let Err(e) =
                screen::load::<R, _>(&client, spec.path, &mut cell, spec.create_wording()).await
            {
                debug!(path = spec.path, error = %e, "Refresh failed");
            }
        });
    };

    let rows = current.items.iter().map(|record| {
        let id = record.id();
        let cells: Vec<(String, Option<String>)> = row_cells(spec, record, &current.users)
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                let chip = (Some(i) == status_column && record.status().is_some())
                    .then(|| format!("status-chip status-{}", cell.replace(' ', "")));
                (cell, chip)
            })
            .collect();
        let action = has_actions
            .then(|| row_action(spec, record, current.submitting, ctx.client.clone(), state));

        rsx! {
            tr { key: "{id}",
                for (cell, chip) in cells {
                    td {
                        if let Some(class) = chip {
                            span { class: "{class}", "{cell}" }
                        } else {
                            "{cell}"
                        }
                    }
                }
                if let Some(action) = action {
                    td { class: "row-actions", {action} }
                }
            }
        }
    });

    rsx! {
        Head { title: spec.title.to_string() }
        div { class: "page-header",
            h1 { "{spec.title}" }
            if spec.refresh {
                button {
                    class: "secondary outline",
                    disabled: current.loading,
                    onclick: on_refresh,
                    "Refresh"
                }
            }
        }

        NotificationBanner {
            notice,
            on_close: move |_| state.write().notice.dismiss(),
        }

        if spec.has_form() {
            {create_form(spec, &current, ctx.client.clone(), state)}
        }

        article {
            if current.loading && current.items.is_empty() {
                p { aria_busy: "true", "Loading…" }
            } else if current.items.is_empty() {
                p { "{spec.empty_text}" }
            } else {
                table {
                    thead {
                        tr {
                            for column in columns.iter() {
                                th { "{column}" }
                            }
                            if has_actions {
                                th { "Action" }
                            }
                        }
                    }
                    tbody {
                        {rows}
                    }
                }
            }
        }
    }
}

fn create_form<R: ScreenRecord>(
    spec: &'static ScreenSpec,
    current: &ScreenState<R>,
    client: ApiClient,
    state: Signal<ScreenState<R>>,
) -> Element {
    let busy = current.submitting;
    let preview = spec.net_preview.then(|| match net_salary_preview(&current.form) {
        Some(net) => net.to_string(),
        None => "out of range".to_string(),
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let mut cell = state;
            if let Err(e) = screen::submit(
                &client,
                spec.path,
                spec.schema,
                &mut cell,
                spec.create_wording(),
            )
            .await
            {
                debug!(path = spec.path, error = %e, "Create failed");
            }
        });
    };

    let fields = spec
        .schema
        .iter()
        .map(|field| field_input(*field, current, state));

    rsx! {
        article {
            form { onsubmit,
                {fields}
                if let Some(net) = preview {
                    p { class: "net-preview", "Net salary (preview): {net}" }
                }
                button {
                    r#type: "submit",
                    disabled: busy,
                    aria_busy: if busy { "true" } else { "false" },
                    "{spec.submit_label}"
                }
            }
        }
    }
}

fn field_input<R: 'static>(
    field: FieldSpec,
    current: &ScreenState<R>,
    mut state: Signal<ScreenState<R>>,
) -> Element {
    let name = field.name;
    let value = current.form.get(name).to_string();
    let oninput = move |e: FormEvent| state.write().form.set(name, e.value());

    let control = match field.kind {
        FieldKind::Text => rsx! {
            input { r#type: "text", name, value: "{value}", oninput }
        },
        FieldKind::TextArea => rsx! {
            textarea { name, rows: "3", value: "{value}", oninput }
        },
        FieldKind::Date => rsx! {
            input { r#type: "date", name, value: "{value}", oninput }
        },
        FieldKind::Decimal => rsx! {
            input { r#type: "number", name, step: "0.01", min: "0", value: "{value}", oninput }
        },
        FieldKind::Select(choices) => {
            let options = choices.iter().map(|choice| (*choice, *choice == value));
            rsx! {
                select { name, onchange: oninput,
                    for (choice, selected) in options {
                        option { value: "{choice}", selected, "{choice}" }
                    }
                }
            }
        }
        FieldKind::UserPicker => {
            let options: Vec<(String, String, bool)> = current
                .users
                .iter()
                .map(|user| {
                    let id = user.id.to_string();
                    let selected = id == value;
                    (id, user.username.clone(), selected)
                })
                .collect();
            rsx! {
                select { name, onchange: oninput,
                    option { value: "", disabled: true, selected: value.is_empty(), "Select a user" }
                    for (id, username, selected) in options {
                        option { value: "{id}", selected, "{username}" }
                    }
                }
            }
        }
    };

    rsx! {
        label { key: "{name}",
            "{field.label}"
            {control}
        }
    }
}

fn row_action<R: ScreenRecord>(
    spec: &'static ScreenSpec,
    record: &R,
    busy: bool,
    client: ApiClient,
    state: Signal<ScreenState<R>>,
) -> Element {
    let id = record.id();
    let current = record.status().unwrap_or_default().to_string();

    let quick = spec.quick_status.map(|quick| {
        let enabled = quick.enabled(record.status(), busy);
        let client = client.clone();
        rsx! {
            button {
                class: "outline",
                disabled: !enabled,
                onclick: move |_| {
                    spawn_status_update(
                        client.clone(),
                        spec,
                        state,
                        id,
                        quick.status.to_string(),
                        None,
                    );
                },
                "{quick.label}"
            }
        }
    });

    let main = match spec.row_action {
        RowAction::None => rsx! {},
        RowAction::StatusSelect(choices) => {
            let options: Vec<(&str, bool)> = choices
                .iter()
                .map(|choice| (*choice, *choice == current))
                .collect();
            rsx! {
                select {
                    disabled: busy,
                    aria_label: "Status",
                    onchange: move |e: FormEvent| {
                        let next = e.value();
                        if next != current {
                            spawn_status_update(client.clone(), spec, state, id, next, None);
                        }
                    },
                    for (choice, selected) in options {
                        option { value: "{choice}", selected, "{choice}" }
                    }
                }
            }
        }
        RowAction::CompletionToggle => {
            let next = TaskStatus::from(current).toggled();
            let label = if next == TaskStatus::Completed {
                "Mark completed"
            } else {
                "Mark pending"
            };
            rsx! {
                button {
                    class: "outline",
                    disabled: busy,
                    onclick: move |_| {
                        let message = format!("Task status updated to {}", next);
                        spawn_status_update(
                            client.clone(),
                            spec,
                            state,
                            id,
                            next.to_string(),
                            Some(message),
                        );
                    },
                    "{label}"
                }
            }
        }
    };

    rsx! {
        {main}
        {quick}
    }
}

fn spawn_status_update<R: ScreenRecord>(
    client: ApiClient,
    spec: &'static ScreenSpec,
    mut state: Signal<ScreenState<R>>,
    id: i64,
    status: String,
    success: Option<String>,
) {
    spawn(async move {
        let wording = spec.update_wording(success.as_deref());
        if let Err(e) = screen::update(
            &client,
            spec.path,
            id,
            &StatusUpdate::new(status),
            &mut state,
            wording,
        )
        .await
        {
            debug!(id, error = %e, "Status update failed");
        }
    });
}
