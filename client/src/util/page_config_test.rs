use super::*;

#[test]
fn missing_element_uses_defaults() {
    assert_eq!(parse(None), OverlayConfig::default());
}

#[test]
fn blank_element_uses_defaults() {
    assert_eq!(parse(Some("  \n ")), OverlayConfig::default());
}

#[test]
fn malformed_element_uses_defaults() {
    assert_eq!(parse(Some("{ \"more_url\": ")), OverlayConfig::default());
}

#[test]
fn element_overrides_fields() {
    let config = parse(Some(r#"{ "initial_scenario": "vip", "debug_overlay": false }"#));
    assert_eq!(config.initial_scenario.as_str(), "vip");
    assert!(!config.debug_overlay);
    assert_eq!(config.container_id, "effectsContainer");
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_is_default() {
    assert_eq!(load(), OverlayConfig::default());
}
