use dioxus::prelude::*;

/// Landing page behind "Back to My Records". Platforms pass their own links
/// to individual records as children.
#[component]
pub fn Records(children: Element) -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-records",
            h1 { {crate::t!("records-title")} }
            p { {crate::t!("records-intro")} }
            ul { class: "page-records__list",
                {children}
            }
        }
    }
}
