use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::RecordConfig;
use ui::record::ProgramRecordData;
use ui::views::{RecordPage, Records};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[redirect("/", || Route::RecordsIndex {})]
    #[route("/records/")]
    RecordsIndex {},
    #[route("/records/programs/:uuid")]
    RecordDetail { uuid: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

// Bundled payloads standing in for the server-rendered record props.
const SAMPLE_RECORD: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/records/sample-record.json"
));
const RECORD_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/records/config.json"
));

fn nav_records(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::RecordsIndex {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            records: nav_records,
        });
    }

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(|| {
        RecordConfig::from_json(RECORD_CONFIG).unwrap_or_else(|err| {
            warn!("falling back to default record config: {err}");
            RecordConfig::default()
        })
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

#[component]
fn RecordsIndex() -> Element {
    let sample_uuid = ProgramRecordData::from_json(SAMPLE_RECORD)
        .map(|record| record.uuid)
        .ok();

    rsx! {
        Records {
            if let Some(uuid) = sample_uuid {
                li {
                    Link { to: Route::RecordDetail { uuid }, {ui::t!("records-open-sample")} }
                }
            }
        }
    }
}

#[component]
fn RecordDetail(uuid: String) -> Element {
    let known = ProgramRecordData::from_json(SAMPLE_RECORD)
        .map(|record| record.uuid == uuid)
        .unwrap_or(false);

    if !known {
        return rsx! {
            section { class: "page",
                p { class: "record-error", {ui::t!("record-load-error")} }
            }
        };
    }

    rsx! {
        RecordPage { payload: SAMPLE_RECORD.to_string() }
    }
}
