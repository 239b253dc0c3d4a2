//! Overlay configuration.
//!
//! Every field has a default, so an empty JSON object (or no configuration at
//! all) reproduces the shipped page. The host may supply a JSON document to
//! retarget ids and assets or to add scenarios.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{ContentVariant, ScenarioCatalog, ScenarioId};
use crate::consts::{
    CONTAINER_ID, DEBUG_HIDE_MS, DEBUG_INFO_ID, DEBUG_OVERLAY_ID, DEGRADED_BACKGROUND_FILE, MORE_URL, SCENE_DIR,
    SCENE_FILE, STATUS_HIDE_MS, STATUS_ID,
};
use crate::engine::{EngineOptions, scene_asset_url};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub container_id: String,
    pub status_id: String,
    pub debug_overlay_id: String,
    pub debug_info_id: String,
    /// Engine URL of the scene description (spaces already encoded).
    pub scene_url: String,
    /// Static artwork behind the degraded view's buttons.
    pub degraded_background_url: String,
    pub more_url: String,
    pub status_hide_ms: u64,
    pub debug_hide_ms: u64,
    /// Show the diagnostic overlay after a successful load.
    pub debug_overlay: bool,
    pub initial_scenario: ScenarioId,
    pub engine: EngineOptions,
    /// Extra or replacement scenarios merged over the built-in catalog.
    pub scenarios: BTreeMap<ScenarioId, ContentVariant>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_owned(),
            status_id: STATUS_ID.to_owned(),
            debug_overlay_id: DEBUG_OVERLAY_ID.to_owned(),
            debug_info_id: DEBUG_INFO_ID.to_owned(),
            scene_url: scene_asset_url(SCENE_DIR, SCENE_FILE),
            degraded_background_url: scene_asset_url(SCENE_DIR, DEGRADED_BACKGROUND_FILE),
            more_url: MORE_URL.to_owned(),
            status_hide_ms: STATUS_HIDE_MS,
            debug_hide_ms: DEBUG_HIDE_MS,
            debug_overlay: true,
            initial_scenario: ScenarioId::default(),
            engine: EngineOptions::default(),
            scenarios: BTreeMap::new(),
        }
    }
}

impl OverlayConfig {
    /// Parse a configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Built-in catalog with configured scenarios merged on top.
    #[must_use]
    pub fn catalog(&self) -> ScenarioCatalog {
        self.scenarios
            .iter()
            .fold(ScenarioCatalog::builtin(), |catalog, (id, variant)| catalog.with_entry(id.clone(), variant.clone()))
    }

    /// Engine options bound to the configured container, with interaction
    /// listening always on.
    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions { container_id: self.container_id.clone(), interactive: true, ..self.engine.clone() }
    }

    #[must_use]
    pub fn status_hide_delay(&self) -> Duration {
        Duration::from_millis(self.status_hide_ms)
    }

    #[must_use]
    pub fn debug_hide_delay(&self) -> Duration {
        Duration::from_millis(self.debug_hide_ms)
    }
}
