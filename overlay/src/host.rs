//! Host capabilities: the page surface, navigation, and deferred callbacks.
//!
//! The controller is handed these as trait objects at construction. Nothing
//! in the core reaches for ambient globals; the browser implementations live
//! in the `client` crate.

use std::rc::Rc;
use std::time::Duration;

use crate::catalog::ScenarioId;
use crate::consts::{CLOSED_MARK, CLOSED_SUBTITLE, CLOSED_TITLE, LABEL_REPLAY};
use crate::degraded::{DegradedActions, DegradedLayout};
use crate::error::OverlayError;
use crate::session::DebugReport;

/// Zero-argument UI callback.
pub type Callback = Rc<dyn Fn()>;

/// Colouring of a status-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Info,
    Warning,
    Error,
}

/// Text of the terminal "closed" surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedView {
    pub mark: String,
    pub title: String,
    pub subtitle: String,
    pub reload_label: String,
}

impl Default for ClosedView {
    fn default() -> Self {
        Self {
            mark: CLOSED_MARK.to_owned(),
            title: CLOSED_TITLE.to_owned(),
            subtitle: CLOSED_SUBTITLE.to_owned(),
            reload_label: LABEL_REPLAY.to_owned(),
        }
    }
}

/// The page the overlay lives in.
pub trait HostSurface {
    /// Whether the animation container element exists.
    fn has_container(&self) -> bool;

    /// Remove whatever the container currently shows.
    fn clear_container(&self);

    /// Replace the container content with the static fallback surface.
    fn render_degraded(&self, layout: &DegradedLayout, actions: DegradedActions);

    /// Replace the container content with the terminal closed surface.
    fn render_closed(&self, view: &ClosedView, on_reload: Callback);

    fn show_status(&self, text: &str, tone: StatusTone);

    fn hide_status(&self);

    /// Best-effort diagnostic overlay.
    fn show_debug(&self, report: &DebugReport);

    fn hide_debug(&self);

    /// Highlight the chrome control for the active scenario.
    fn mark_active_scenario(&self, id: &ScenarioId);
}

/// Browsing-context actions.
pub trait Navigator {
    /// Open `url` in a new browsing context with no opener and no referrer.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::NavigationFailure`] if the context could not
    /// be opened (popup blocked, no window).
    fn open_external(&self, url: &str) -> Result<(), OverlayError>;

    /// Full page reload.
    fn reload(&self);
}

/// One-shot deferred callbacks on the event loop.
pub trait Scheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
