use std::cell::Cell;
use std::rc::Rc;

use overlay::degraded::{DegradeReason, DegradedLayout};
use overlay::error::OverlayError;

use super::*;

fn host() -> (RwSignal<StageState>, StageActions, SignalHost) {
    let stage = RwSignal::new(StageState::default());
    let actions = StageActions::new();
    (stage, actions, SignalHost::new(stage, actions, "effectsContainer"))
}

fn counter() -> (Rc<Cell<usize>>, Callback) {
    let hits = Rc::new(Cell::new(0));
    let inner = Rc::clone(&hits);
    (hits, Rc::new(move || inner.set(inner.get() + 1)))
}

fn runtime_layout() -> DegradedLayout {
    DegradedLayout::for_reason("./bg.png", &DegradeReason::Runtime("lost".into()))
}

// =============================================================
// Status and debug
// =============================================================

#[test]
fn status_show_and_hide() {
    let (stage, _, host) = host();
    host.show_status("正在加载默认场景动画...", StatusTone::Info);
    assert_eq!(
        stage.get_untracked().status,
        Some(StatusLine { text: "正在加载默认场景动画...".into(), tone: StatusTone::Info })
    );
    host.hide_status();
    assert_eq!(stage.get_untracked().status, None);
}

#[test]
fn active_scenario_is_recorded() {
    let (stage, _, host) = host();
    host.mark_active_scenario(&ScenarioId::vip());
    assert_eq!(stage.get_untracked().active_scenario, ScenarioId::vip());
}

// =============================================================
// Surfaces
// =============================================================

#[test]
fn degraded_surface_wires_actions() {
    let (stage, actions, host) = host();
    let (more_hits, on_more) = counter();
    let (close_hits, on_close) = counter();

    host.render_degraded(&runtime_layout(), DegradedActions { on_more, on_close: Some(on_close) });

    assert_eq!(stage.get_untracked().surface, Surface::Degraded(runtime_layout()));
    actions.more();
    actions.close();
    assert_eq!((more_hits.get(), close_hits.get()), (1, 1));
}

#[test]
fn clear_container_drops_actions() {
    let (stage, actions, host) = host();
    let (more_hits, on_more) = counter();
    host.render_degraded(&runtime_layout(), DegradedActions { on_more, on_close: None });

    host.clear_container();
    actions.more();

    assert_eq!(stage.get_untracked().surface, Surface::Engine);
    assert_eq!(more_hits.get(), 0);
}

#[test]
fn closed_surface_replaces_degraded() {
    let (stage, actions, host) = host();
    let (more_hits, on_more) = counter();
    let (reload_hits, on_reload) = counter();
    host.render_degraded(
        &DegradedLayout::for_reason("./bg.png", &DegradeReason::Init(OverlayError::ContainerMissing)),
        DegradedActions { on_more, on_close: None },
    );

    host.render_closed(&ClosedView::default(), on_reload);
    actions.more();
    actions.reload();

    assert_eq!(stage.get_untracked().surface, Surface::Closed(ClosedView::default()));
    assert_eq!((more_hits.get(), reload_hits.get()), (0, 1));
}
