//! Clipboard access for copy-to-clipboard buttons.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard copy blocked")]
    Blocked,
}

pub async fn copy_text(payload: String) -> Result<(), ClipboardError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let unavailable = |what: &str| ClipboardError::Unavailable(what.to_string());

        let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
        let document = window
            .document()
            .ok_or_else(|| unavailable("document"))?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| unavailable("html document"))?;
        let body = document.body().ok_or_else(|| unavailable("body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| unavailable("textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| unavailable("textarea cast"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(ClipboardError::Blocked)
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))
    }
}
