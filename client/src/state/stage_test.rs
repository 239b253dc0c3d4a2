use super::*;

fn report() -> DebugReport {
    DebugReport {
        scenario: "vip".into(),
        content_url: "https://i.ibb.co/RT1rKS7s/funding-level.png".into(),
        button_bg_url: "https://i.ibb.co/VWtSkwpV/button-1.png".into(),
        button_label: "查看 VIP权益".into(),
        more_found: true,
        close_found: false,
        interactive_items: 1,
        engine_interactive: true,
    }
}

// =============================================================
// StageState
// =============================================================

#[test]
fn new_stage_shows_engine_only() {
    let stage = StageState::new(ScenarioId::vip());
    assert_eq!(stage.surface, Surface::Engine);
    assert_eq!(stage.status, None);
    assert_eq!(stage.debug, None);
    assert_eq!(stage.active_scenario, ScenarioId::vip());
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn tone_classes_are_distinct() {
    let classes = [tone_class(StatusTone::Info), tone_class(StatusTone::Warning), tone_class(StatusTone::Error)];
    assert_eq!(classes[1], "status status-warning");
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
}

#[test]
fn arrangement_classes() {
    assert_eq!(arrangement_class(Arrangement::Centered), "degraded degraded-centered");
    assert_eq!(arrangement_class(Arrangement::SpaceBetween), "degraded degraded-split");
}

#[test]
fn background_style_quotes_url() {
    assert_eq!(
        background_style("./Purchase_Success%20/downgrade/content.png"),
        "background-image: url('./Purchase_Success%20/downgrade/content.png')"
    );
    assert_eq!(background_style("./it's.png"), "background-image: url('./it%27s.png')");
}

#[test]
fn debug_rows_cover_report() {
    let rows = debug_rows(&report());
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].1, "vip");
    assert_eq!(rows[4].1, "✅找到");
    assert_eq!(rows[5].1, "❌未找到");
    assert_eq!(rows[6].1, "1");
    assert_eq!(rows[7].1, "✅启用");
}

#[test]
fn scenario_labels() {
    assert_eq!(scenario_label(&ScenarioId::default(), "默认"), "默认场景");
    assert_eq!(scenario_label(&ScenarioId::vip(), "VIP"), "VIP 场景");
}
