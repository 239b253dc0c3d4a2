//! Degraded view: static artwork plus HTML buttons when the engine is unusable.
//!
//! The buttons call the same controller handlers as the engine's hotspots, so
//! "more" and "close" behave identically on both surfaces. An init-time
//! failure has no session to close, so its layout shows only "more".

#[cfg(test)]
#[path = "degraded_test.rs"]
mod degraded_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::consts::{LABEL_CLOSE, LABEL_MORE};
use crate::error::OverlayError;
use crate::host::{Callback, HostSurface};

/// Why the overlay degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    /// Construction or scene load failed before any session was usable.
    Init(OverlayError),
    /// The engine reported an error while loading or playing.
    Runtime(String),
}

impl DegradeReason {
    #[must_use]
    pub fn is_init(&self) -> bool {
        matches!(self, Self::Init(_))
    }
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(err) => write!(f, "init failure: {err}"),
            Self::Runtime(msg) => write!(f, "runtime engine error: {msg}"),
        }
    }
}

/// Horizontal arrangement of the fallback buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Single "more" button, centered.
    Centered,
    /// "close" at the left edge, "more" at the right.
    SpaceBetween,
}

/// What the host should draw for the degraded surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedLayout {
    pub background_url: String,
    pub more_label: String,
    pub close_label: String,
    pub show_close: bool,
    pub arrangement: Arrangement,
}

impl DegradedLayout {
    #[must_use]
    pub fn for_reason(background_url: &str, reason: &DegradeReason) -> Self {
        let show_close = !reason.is_init();
        Self {
            background_url: background_url.to_owned(),
            more_label: LABEL_MORE.to_owned(),
            close_label: LABEL_CLOSE.to_owned(),
            show_close,
            arrangement: if show_close { Arrangement::SpaceBetween } else { Arrangement::Centered },
        }
    }
}

/// Button handlers handed to the host at activation time.
#[derive(Clone)]
pub struct DegradedActions {
    pub on_more: Callback,
    /// Present only when the layout shows a close button.
    pub on_close: Option<Callback>,
}

impl fmt::Debug for DegradedActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DegradedActions").field("on_close", &self.on_close.is_some()).finish_non_exhaustive()
    }
}

/// Presents and removes the degraded surface.
pub struct DegradedViewController {
    host: Rc<dyn HostSurface>,
    background_url: String,
    active: RefCell<Option<DegradedLayout>>,
}

impl DegradedViewController {
    #[must_use]
    pub fn new(host: Rc<dyn HostSurface>, background_url: &str) -> Self {
        Self { host, background_url: background_url.to_owned(), active: RefCell::new(None) }
    }

    /// Replace the container with the fallback surface for `reason`.
    ///
    /// `on_close` is dropped when the layout has no close button.
    pub fn activate(&self, reason: &DegradeReason, on_more: Callback, on_close: Callback) {
        let layout = DegradedLayout::for_reason(&self.background_url, reason);
        let actions = DegradedActions { on_more, on_close: layout.show_close.then_some(on_close) };
        log::warn!("activating degraded view ({reason}); close button: {}", layout.show_close);
        self.host.render_degraded(&layout, actions);
        *self.active.borrow_mut() = Some(layout);
    }

    /// Remove the fallback surface. No-op when inactive.
    pub fn deactivate(&self) {
        let previous = self.active.borrow_mut().take();
        if previous.is_some() {
            log::debug!("deactivating degraded view");
            self.host.clear_container();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.borrow().is_some()
    }
}
