//! Scenario catalog: which images and label each scenario injects.
//!
//! Pure lookup. Entries are immutable once built; switching scenario only
//! changes which entry the controller asks for. Unknown ids resolve to the
//! `default` entry, which every catalog is guaranteed to have.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{NODE_BUTTON_BG, NODE_BUTTON_TEXT, NODE_CONTENT};
use crate::engine::SceneVariables;

const DEFAULT_ID: &str = "default";
const VIP_ID: &str = "vip";

const FALLBACK_CONTENT: &str = "./Purchase_Success /images/04a90d7bc3db830ae1f477b33523d5ce.png";
const FALLBACK_BUTTON_BG: &str = "./Purchase_Success /images/1896408455d98e4b89bd7fcb0f9c1f15.png";

/// Identifier of a content scenario (`default`, `vip`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(String);

impl ScenarioId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn vip() -> Self {
        Self::new(VIP_ID)
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_ID
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::new(DEFAULT_ID)
    }
}

impl From<&str> for ScenarioId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dynamic content injected into the scene for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentVariant {
    /// Short human name used in loading notices.
    pub display_name: String,
    pub primary_image_url: String,
    pub fallback_image_url: String,
    pub button_background_primary_url: String,
    pub button_background_fallback_url: String,
    pub button_label: String,
}

impl ContentVariant {
    /// Image substitutions: `content` and `button_bg` as `[primary, fallback]`.
    #[must_use]
    pub fn image_variables(&self) -> SceneVariables {
        let mut vars = SceneVariables::new();
        vars.insert_image(NODE_CONTENT, &self.primary_image_url, &self.fallback_image_url);
        vars.insert_image(NODE_BUTTON_BG, &self.button_background_primary_url, &self.button_background_fallback_url);
        vars
    }

    /// Text substitutions: `button_text`.
    #[must_use]
    pub fn text_variables(&self) -> SceneVariables {
        let mut vars = SceneVariables::new();
        vars.insert_text(NODE_BUTTON_TEXT, &self.button_label);
        vars
    }
}

/// Lookup table from [`ScenarioId`] to [`ContentVariant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCatalog {
    default: ContentVariant,
    others: BTreeMap<ScenarioId, ContentVariant>,
}

impl ScenarioCatalog {
    /// The two scenarios the product ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let default = ContentVariant {
            display_name: "默认".to_owned(),
            primary_image_url: "https://i.ibb.co/9mfsG8XM/black-level.png".to_owned(),
            fallback_image_url: FALLBACK_CONTENT.to_owned(),
            button_background_primary_url: "https://i.ibb.co/wNMpNZ2x/button.png".to_owned(),
            button_background_fallback_url: FALLBACK_BUTTON_BG.to_owned(),
            button_label: "查看更多权益".to_owned(),
        };
        let vip = ContentVariant {
            display_name: "VIP".to_owned(),
            primary_image_url: "https://i.ibb.co/RT1rKS7s/funding-level.png".to_owned(),
            fallback_image_url: FALLBACK_CONTENT.to_owned(),
            button_background_primary_url: "https://i.ibb.co/VWtSkwpV/button-1.png".to_owned(),
            button_background_fallback_url: FALLBACK_BUTTON_BG.to_owned(),
            button_label: "查看 VIP权益".to_owned(),
        };
        Self::new(default).with_entry(ScenarioId::vip(), vip)
    }

    /// Catalog containing only a default entry.
    #[must_use]
    pub fn new(default: ContentVariant) -> Self {
        Self { default, others: BTreeMap::new() }
    }

    /// Add or replace an entry.
    #[must_use]
    pub fn with_entry(mut self, id: ScenarioId, variant: ContentVariant) -> Self {
        if id.is_default() {
            self.default = variant;
        } else {
            self.others.insert(id, variant);
        }
        self
    }

    /// Content for `id`, or the default entry when `id` is unknown.
    #[must_use]
    pub fn get(&self, id: &ScenarioId) -> &ContentVariant {
        if id.is_default() {
            return &self.default;
        }
        self.others.get(id).unwrap_or(&self.default)
    }

    /// Whether `id` has its own entry.
    #[must_use]
    pub fn contains(&self, id: &ScenarioId) -> bool {
        id.is_default() || self.others.contains_key(id)
    }

    /// All ids, `default` first.
    #[must_use]
    pub fn ids(&self) -> Vec<ScenarioId> {
        std::iter::once(ScenarioId::default()).chain(self.others.keys().cloned()).collect()
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
