use crate::i18n;
use crate::t;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Links the platform crate builds from its own `Route` enum.
///
/// `ui` never sees the routes. Each function receives the localized label:
/// ```ignore
/// register_nav(NavBuilder {
///     records: |label| rsx!(Link { class: "navbar__link", to: Route::RecordsIndex {}, "{label}" }),
/// });
/// ```
pub struct NavBuilder {
    pub records: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins; later calls (re-rendered roots) are ignored.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        debug!("[nav] builder already registered");
    }
}

/// Header with the product mark, the records link and the language picker.
/// Without a registered [`NavBuilder`] the `children` fill the link slot.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    // Reading the platform's language signal re-renders the labels on a switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|code| code()).unwrap_or_default();

    let links = match NAV_BUILDER.get() {
        Some(builder) => (builder.records)(&t!("nav-records")),
        None => children,
    };
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar", "data-lang": "{lang_marker}",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Credentials" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }
                nav { class: "navbar__links", {links} }
                LocaleSwitcher { languages: i18n::available_languages() }
            }
        }
    }
}

/// `<option>` rows for the picker, with `current` selected. Unknown current
/// codes select nothing rather than inventing an entry.
fn locale_options(languages: &[String], current: &str) -> Vec<(String, bool)> {
    languages
        .iter()
        .map(|code| (code.clone(), code == current))
        .collect()
}

/// Language `<select>`; hidden when only one bundle is embedded.
#[component]
fn LocaleSwitcher(languages: Vec<String>) -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current = use_signal(|| {
        lang_code
            .as_ref()
            .map(|code| code())
            .unwrap_or_else(|| "en-US".to_string())
    });

    if languages.len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let requested = evt.value();
        match i18n::set_language(&requested) {
            Ok(()) => {
                current.set(requested.clone());
                if let Some(mut code) = lang_code {
                    code.set(requested);
                }
            }
            Err(err) => warn!("[i18n] keeping {}: {err}", current()),
        }
    };

    rsx! {
        div { class: "navbar__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select { id: "locale-select", value: "{current}", oninput: on_change,
                for (code, selected) in locale_options(&languages, &current()) {
                    option { key: "{code}", value: "{code}", selected: selected, "{code}" }
                }
            }
        }
    }
}
