//! Keyboard focus moves that log when the renderer refuses them.

use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Focus `element`; `target` names it in the log line when focus does not land.
pub async fn focus(element: Rc<MountedData>, target: &str) -> bool {
    landed(element.set_focus(true).await, target)
}

fn landed(result: MountedResult<()>, target: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            debug!("focus on {target} did not land: {err}");
            false
        }
    }
}
