use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::i18n::Catalog;
use crate::record::{ProgramRecord, ProgramRecordData};

/// Program record page fed from a JSON payload.
#[component]
pub fn RecordPage(payload: String) -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // A fresh catalog on every render makes a language switch reach the record.
    let catalog = Catalog::fluent();

    match ProgramRecordData::from_json(&payload) {
        Ok(record) => rsx! {
            div { style: "display:none", "{lang_marker}" }
            ProgramRecord {
                learner: record.learner,
                program: record.program,
                grades: record.grades,
                uuid: record.uuid,
                platform_name: record.platform_name,
                catalog,
            }
        },
        Err(err) => {
            warn!("program record payload rejected: {err}");
            rsx! {
                section { class: "page page-record-error",
                    p { class: "record-error", {crate::t!("record-load-error")} }
                    p { class: "record-error__detail", "{err}" }
                }
            }
        }
    }
}
