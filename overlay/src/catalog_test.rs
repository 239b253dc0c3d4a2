
use super::*;

fn variant(label: &str) -> ContentVariant {
    ContentVariant {
        display_name: label.to_owned(),
        primary_image_url: format!("https://cdn/{label}.png"),
        fallback_image_url: "./fallback.png".to_owned(),
        button_background_primary_url: format!("https://cdn/{label}-btn.png"),
        button_background_fallback_url: "./fallback-btn.png".to_owned(),
        button_label: label.to_owned(),
    }
}

// =============================================================
// Built-in entries
// =============================================================

#[test]
fn builtin_default_entry() {
    let catalog = ScenarioCatalog::builtin();
    let default = catalog.get(&ScenarioId::default());
    assert_eq!(default.display_name, "默认");
    assert_eq!(default.primary_image_url, "https://i.ibb.co/9mfsG8XM/black-level.png");
    assert_eq!(default.button_background_primary_url, "https://i.ibb.co/wNMpNZ2x/button.png");
    assert_eq!(default.button_label, "查看更多权益");
}

#[test]
fn builtin_vip_entry() {
    let catalog = ScenarioCatalog::builtin();
    let vip = catalog.get(&ScenarioId::vip());
    assert_eq!(vip.display_name, "VIP");
    assert_eq!(vip.primary_image_url, "https://i.ibb.co/RT1rKS7s/funding-level.png");
    assert_eq!(vip.button_background_primary_url, "https://i.ibb.co/VWtSkwpV/button-1.png");
    assert_eq!(vip.button_label, "查看 VIP权益");
}

#[test]
fn builtin_fallbacks_point_at_local_assets() {
    let catalog = ScenarioCatalog::default();
    for id in catalog.ids() {
        let entry = catalog.get(&id);
        assert!(entry.fallback_image_url.starts_with("./Purchase_Success /images/"));
        assert!(entry.button_background_fallback_url.starts_with("./Purchase_Success /images/"));
    }
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn unknown_id_returns_default_entry() {
    let catalog = ScenarioCatalog::builtin();
    let unknown = ScenarioId::from("spring-sale");
    assert_eq!(catalog.get(&unknown), catalog.get(&ScenarioId::default()));
    assert!(!catalog.contains(&unknown));
    assert!(catalog.contains(&ScenarioId::vip()));
}

#[test]
fn ids_list_default_first() {
    let catalog = ScenarioCatalog::builtin().with_entry("autumn".into(), variant("autumn"));
    let ids: Vec<String> = catalog.ids().iter().map(ToString::to_string).collect();
    assert_eq!(ids, ["default", "autumn", "vip"]);
}

#[test]
fn with_entry_can_replace_default() {
    let catalog = ScenarioCatalog::builtin().with_entry(ScenarioId::default(), variant("plain"));
    assert_eq!(catalog.get(&ScenarioId::default()).button_label, "plain");
    assert_eq!(catalog.get(&"missing".into()).button_label, "plain");
}

// =============================================================
// Variables
// =============================================================

#[test]
fn image_variables_carry_primary_and_fallback() {
    let vars = variant("gold").image_variables();
    assert_eq!(vars.len(), 2);
    assert_eq!(
        vars.get("content"),
        Some(&crate::engine::VariableValue::Image(["https://cdn/gold.png".into(), "./fallback.png".into()]))
    );
    assert_eq!(vars.get("button_bg").and_then(|v| v.primary_url()), Some("https://cdn/gold-btn.png"));
}

#[test]
fn text_variables_carry_button_label() {
    let vars = variant("gold").text_variables();
    assert_eq!(vars.len(), 1);
    assert_eq!(vars.get("button_text").and_then(|v| v.text()), Some("gold"));
}

#[test]
fn scenario_id_is_a_plain_json_string() {
    assert_eq!(serde_json::to_string(&ScenarioId::vip()).unwrap(), "\"vip\"");
    let id: ScenarioId = serde_json::from_str("\"default\"").unwrap();
    assert!(id.is_default());
    assert_eq!(id.as_str(), "default");
}
