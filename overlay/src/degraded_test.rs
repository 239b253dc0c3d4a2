use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::fakes::{FakeHost, HostCall};

const BG: &str = "./Purchase_Success%20/downgrade/content.png";

fn counter() -> (Rc<Cell<usize>>, Callback) {
    let hits = Rc::new(Cell::new(0));
    let cb_hits = Rc::clone(&hits);
    (hits, Rc::new(move || cb_hits.set(cb_hits.get() + 1)))
}

fn runtime() -> DegradeReason {
    DegradeReason::Runtime("context lost".into())
}

// =============================================================
// Layout
// =============================================================

#[test]
fn init_failure_layout_is_centered_without_close() {
    let layout = DegradedLayout::for_reason(BG, &DegradeReason::Init(OverlayError::ContainerMissing));
    assert!(!layout.show_close);
    assert_eq!(layout.arrangement, Arrangement::Centered);
    assert_eq!(layout.background_url, BG);
    assert_eq!(layout.more_label, "查看更多权益");
}

#[test]
fn runtime_failure_layout_has_close_on_the_left() {
    let layout = DegradedLayout::for_reason(BG, &runtime());
    assert!(layout.show_close);
    assert_eq!(layout.arrangement, Arrangement::SpaceBetween);
    assert_eq!(layout.close_label, "关闭");
}

#[test]
fn reason_display() {
    let init = DegradeReason::Init(OverlayError::EngineUnavailable("no webgl".into()));
    assert!(init.is_init());
    assert_eq!(init.to_string(), "init failure: rendering engine unavailable: no webgl");
    assert_eq!(runtime().to_string(), "runtime engine error: context lost");
}

// =============================================================
// Activation
// =============================================================

#[test]
fn activate_renders_and_wires_buttons() {
    let host = FakeHost::new();
    let view = DegradedViewController::new(host.clone(), BG);
    let (more_hits, on_more) = counter();
    let (close_hits, on_close) = counter();

    view.activate(&runtime(), on_more, on_close);

    assert!(view.is_active());
    assert_eq!(host.degraded_layout().map(|l| l.show_close), Some(true));
    host.click_degraded_more();
    host.click_degraded_close();
    assert_eq!(more_hits.get(), 1);
    assert_eq!(close_hits.get(), 1);
}

#[test]
fn init_activation_drops_close_handler() {
    let host = FakeHost::new();
    let view = DegradedViewController::new(host.clone(), BG);
    let (_, on_more) = counter();
    let (close_hits, on_close) = counter();

    view.activate(&DegradeReason::Init(OverlayError::SceneLoadFailure("404".into())), on_more, on_close);

    assert!(!host.degraded_has_close());
    host.click_degraded_close();
    assert_eq!(close_hits.get(), 0);
}

#[test]
fn deactivate_clears_once() {
    let host = FakeHost::new();
    let view = DegradedViewController::new(host.clone(), BG);
    let (_, on_more) = counter();
    let (_, on_close) = counter();

    view.deactivate();
    assert_eq!(host.count(|c| *c == HostCall::ClearContainer), 0);

    view.activate(&runtime(), on_more, on_close);
    view.deactivate();
    view.deactivate();
    assert!(!view.is_active());
    assert_eq!(host.count(|c| *c == HostCall::ClearContainer), 1);
}
