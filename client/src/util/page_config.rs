//! Overlay configuration embedded in the page shell.
//!
//! The shell may carry a `<script type="application/json" id="overlay-config">`
//! element. A missing or empty element means defaults; a malformed one is
//! logged and also falls back to defaults, so a typo never blanks the page.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use overlay::OverlayConfig;

/// Id of the configuration `<script>` element.
pub const CONFIG_ELEMENT_ID: &str = "overlay-config";

/// Parse the raw element text, falling back to defaults.
pub fn parse(raw: Option<&str>) -> OverlayConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return OverlayConfig::default();
    };
    match OverlayConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}; using default overlay configuration");
            OverlayConfig::default()
        }
    }
}

/// Read and parse the page's configuration element.
pub fn load() -> OverlayConfig {
    parse(element_text(CONFIG_ELEMENT_ID).as_deref())
}

fn element_text(id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.document()?.get_element_by_id(id)?.text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}
