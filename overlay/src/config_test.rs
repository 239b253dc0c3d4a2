use std::time::Duration;

use super::*;

#[test]
fn defaults_match_shipped_page() {
    let config = OverlayConfig::default();
    assert_eq!(config.container_id, "effectsContainer");
    assert_eq!(config.status_id, "loadingText");
    assert_eq!(config.scene_url, "./Purchase_Success%20/content.json");
    assert_eq!(config.degraded_background_url, "./Purchase_Success%20/downgrade/content.png");
    assert_eq!(config.more_url, "https://www.shuyouyinli.com/");
    assert_eq!(config.status_hide_delay(), Duration::from_secs(3));
    assert_eq!(config.debug_hide_delay(), Duration::from_secs(8));
    assert!(config.debug_overlay);
    assert!(config.initial_scenario.is_default());
}

#[test]
fn empty_document_is_default() {
    assert_eq!(OverlayConfig::from_json("{}").unwrap(), OverlayConfig::default());
}

#[test]
fn partial_document_overrides_named_fields() {
    let config = OverlayConfig::from_json(
        r#"{ "more_url": "https://example.test/", "initial_scenario": "vip", "engine": { "pixel_ratio": 2.0 } }"#,
    )
    .unwrap();
    assert_eq!(config.more_url, "https://example.test/");
    assert_eq!(config.initial_scenario, ScenarioId::vip());
    assert_eq!(config.engine.pixel_ratio, Some(2.0));
    assert_eq!(config.container_id, "effectsContainer");
}

#[test]
fn malformed_document_is_rejected() {
    let err = OverlayConfig::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid overlay configuration"));
}

#[test]
fn configured_scenarios_merge_over_builtin() {
    let config = OverlayConfig::from_json(
        r#"{
            "scenarios": {
                "autumn": {
                    "display_name": "秋季",
                    "primary_image_url": "https://cdn/autumn.png",
                    "fallback_image_url": "./a.png",
                    "button_background_primary_url": "https://cdn/autumn-btn.png",
                    "button_background_fallback_url": "./b.png",
                    "button_label": "查看秋季权益"
                }
            }
        }"#,
    )
    .unwrap();
    let catalog = config.catalog();
    assert_eq!(catalog.get(&"autumn".into()).button_label, "查看秋季权益");
    assert_eq!(catalog.get(&ScenarioId::vip()).button_label, "查看 VIP权益");
    assert_eq!(catalog.ids().len(), 3);
}

#[test]
fn engine_options_bind_container_and_force_interaction() {
    let config = OverlayConfig::from_json(r#"{ "container_id": "stage", "engine": { "interactive": false } }"#).unwrap();
    let options = config.engine_options();
    assert_eq!(options.container_id, "stage");
    assert!(options.interactive);
}
