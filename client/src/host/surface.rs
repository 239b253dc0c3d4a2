//! `HostSurface` backed by the stage signal.
//!
//! DESIGN
//! ======
//! Controller requests become `RwSignal<StageState>` updates; the stage
//! components render them. Button callbacks are `Rc` and cannot live in a
//! signal, so they sit in local-only [`StoredValue`]s that the components
//! read on click ([`StageActions`]).

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use leptos::prelude::*;
use overlay::ScenarioId;
use overlay::degraded::{DegradedActions, DegradedLayout};
use overlay::host::{Callback, ClosedView, HostSurface, StatusTone};
use overlay::session::DebugReport;

use super::dom;
use crate::state::stage::{StageState, StatusLine, Surface};

/// Callbacks for the buttons currently on the stage.
#[derive(Clone, Copy)]
pub struct StageActions {
    pub degraded: StoredValue<Option<DegradedActions>, LocalStorage>,
    pub reload: StoredValue<Option<Callback>, LocalStorage>,
}

impl StageActions {
    pub fn new() -> Self {
        Self { degraded: StoredValue::new_local(None), reload: StoredValue::new_local(None) }
    }

    fn clear(&self) {
        self.degraded.set_value(None);
        self.reload.set_value(None);
    }

    /// Run the degraded view's "more" action, if it is showing.
    pub fn more(&self) {
        let action = self.degraded.with_value(|a| a.as_ref().map(|a| a.on_more.clone()));
        if let Some(action) = action {
            action();
        }
    }

    /// Run the degraded view's "close" action, if it has one.
    pub fn close(&self) {
        let action = self.degraded.with_value(|a| a.as_ref().and_then(|a| a.on_close.clone()));
        if let Some(action) = action {
            action();
        }
    }

    /// Run the closed view's reload action.
    pub fn reload(&self) {
        let action = self.reload.with_value(Clone::clone);
        if let Some(action) = action {
            action();
        }
    }
}

impl Default for StageActions {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SignalHost {
    stage: RwSignal<StageState>,
    actions: StageActions,
    container_id: String,
}

impl SignalHost {
    pub fn new(stage: RwSignal<StageState>, actions: StageActions, container_id: &str) -> Self {
        Self { stage, actions, container_id: container_id.to_owned() }
    }
}

impl HostSurface for SignalHost {
    fn has_container(&self) -> bool {
        dom::element_exists(&self.container_id)
    }

    fn clear_container(&self) {
        dom::clear_children(&self.container_id);
        self.actions.clear();
        self.stage.update(|s| s.surface = Surface::Engine);
    }

    fn render_degraded(&self, layout: &DegradedLayout, actions: DegradedActions) {
        dom::clear_children(&self.container_id);
        self.actions.reload.set_value(None);
        self.actions.degraded.set_value(Some(actions));
        self.stage.update(|s| s.surface = Surface::Degraded(layout.clone()));
    }

    fn render_closed(&self, view: &ClosedView, on_reload: Callback) {
        dom::clear_children(&self.container_id);
        self.actions.degraded.set_value(None);
        self.actions.reload.set_value(Some(on_reload));
        self.stage.update(|s| s.surface = Surface::Closed(view.clone()));
    }

    fn show_status(&self, text: &str, tone: StatusTone) {
        let line = StatusLine { text: text.to_owned(), tone };
        self.stage.update(|s| s.status = Some(line));
    }

    fn hide_status(&self) {
        self.stage.update(|s| s.status = None);
    }

    fn show_debug(&self, report: &DebugReport) {
        let report = report.clone();
        self.stage.update(|s| s.debug = Some(report));
    }

    fn hide_debug(&self) {
        self.stage.update(|s| s.debug = None);
    }

    fn mark_active_scenario(&self, id: &ScenarioId) {
        let id = id.clone();
        self.stage.update(|s| s.active_scenario = id);
    }
}
