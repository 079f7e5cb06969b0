//! Open/closed state of the share dialog.
//!
//! Generic over the anchor type so the transitions can be exercised without a
//! mounted DOM; the view stores `Rc<MountedData>` for the share button.

use dioxus::logger::tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDisclosure<A> {
    open: bool,
    anchor: Option<A>,
}

impl<A> Default for ShareDisclosure<A> {
    fn default() -> Self {
        Self {
            open: false,
            anchor: None,
        }
    }
}

impl<A: Clone> ShareDisclosure<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Remember the element that opens the dialog, for focus restoration.
    pub fn set_anchor(&mut self, anchor: A) {
        self.anchor = Some(anchor);
    }

    pub fn anchor(&self) -> Option<&A> {
        self.anchor.as_ref()
    }

    /// `closed -> open`. Opening an open dialog changes nothing.
    pub fn open(&mut self) {
        if !self.open {
            debug!("share dialog opened");
        }
        self.open = true;
    }

    /// `open -> closed`. Returns the element that should get focus back, or
    /// `None` when no share button was ever recorded.
    pub fn close(&mut self) -> Option<A> {
        if self.open {
            debug!("share dialog closed");
        }
        self.open = false;
        self.anchor.clone()
    }
}
