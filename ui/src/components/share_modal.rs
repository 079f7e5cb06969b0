use std::time::Duration;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::{clipboard, focus, interpolate, timing, use_record_config};
use crate::i18n::Catalog;

const COPIED_RESET: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq)]
enum CopyStatus {
    Idle,
    Copied,
    Failed(String),
}

/// Public URL of a shared program record.
pub fn share_link(base: &str, uuid: &str) -> String {
    format!(
        "{}/records/programs/shared/{}/",
        base.trim_end_matches('/'),
        uuid.trim()
    )
}

/// Modal for copying the public link to a program record.
///
/// Closes through the Close button, Escape, or a click on the backdrop;
/// `on_close` fires once per gesture and the parent decides what happens next.
#[component]
pub fn ShareRecordModal(
    on_close: EventHandler<()>,
    parent_selector: String,
    username: String,
    uuid: String,
    catalog: Catalog,
) -> Element {
    let config = use_record_config();
    let link = share_link(&config.share_base_url, &uuid);
    let mut status = use_signal(|| CopyStatus::Idle);

    let title = catalog.gettext("Share this program record");
    let description = interpolate(
        &catalog.gettext("Anyone with this link can view the program record of {username}."),
        &[("username", &username)],
    );
    let link_label = catalog.gettext("Public link");
    let copy_label = catalog.gettext("Copy Link");
    let copied_label = catalog.gettext("Copied!");
    let close_label = catalog.gettext("Close");

    let copy_handler = {
        let link = link.clone();
        move |_| {
            let payload = link.clone();
            spawn(async move {
                match clipboard::copy_text(payload).await {
                    Ok(()) => {
                        status.set(CopyStatus::Copied);
                        timing::sleep(COPIED_RESET).await;
                        if status() == CopyStatus::Copied {
                            status.set(CopyStatus::Idle);
                        }
                    }
                    Err(err) => {
                        warn!("share link copy failed: {err}");
                        status.set(CopyStatus::Failed(err.to_string()));
                    }
                }
            });
        }
    };

    let feedback = match status() {
        CopyStatus::Idle => None,
        CopyStatus::Copied => Some(("share-modal__status share-modal__status--success", copied_label)),
        CopyStatus::Failed(err) => Some(("share-modal__status share-modal__status--error", err)),
    };

    rsx! {
        div {
            class: "modal-backdrop",
            "data-parent-selector": "{parent_selector}",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal share-modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "share-modal-title",
                tabindex: "-1",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        on_close.call(());
                    }
                },
                onmounted: move |evt| async move {
                    focus::focus(evt.data(), "share dialog").await;
                },

                div { class: "modal__header",
                    h2 { id: "share-modal-title", class: "hd-4", "{title}" }
                }
                div { class: "modal__body",
                    p { class: "share-modal__description", "{description}" }
                    label { r#for: "share-modal-link", "{link_label}" }
                    div { class: "share-modal__link-row",
                        input {
                            id: "share-modal-link",
                            class: "share-modal__link",
                            r#type: "text",
                            readonly: true,
                            value: "{link}",
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-primary",
                            onclick: copy_handler,
                            "{copy_label}"
                        }
                    }
                    if let Some((class, message)) = feedback {
                        p { class, role: "status", "{message}" }
                    }
                }
                div { class: "modal__footer",
                    button {
                        r#type: "button",
                        class: "btn btn-outline-primary",
                        onclick: move |_| on_close.call(()),
                        "{close_label}"
                    }
                }
            }
        }
    }
}
