#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

use dioxus::logger::tracing::warn;
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::RecordConfig;
use ui::record::ProgramRecordData;
use ui::views::{RecordPage, Records};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[redirect("/", || Route::RecordsIndex {})]
    #[route("/records/")]
    RecordsIndex {},
    #[route("/records/programs/:uuid")]
    RecordDetail { uuid: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; no separate desktop stylesheet.

const SAMPLE_RECORD: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/records/sample-record.json"
));
const RECORD_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/records/config.json"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Credentials – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_records(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::RecordsIndex {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar updates this on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(|| {
        RecordConfig::from_json(RECORD_CONFIG).unwrap_or_else(|err| {
            warn!("falling back to default record config: {err}");
            RecordConfig::default()
        })
    });

    register_nav(NavBuilder {
        records: nav_records,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so a switch remounts the routed subtree.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
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
