//! `Navigator` over `window.open` and `location.reload`.

use overlay::consts::EXTERNAL_WINDOW_FEATURES;
use overlay::error::OverlayError;
use overlay::host::Navigator;

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_external(&self, url: &str) -> Result<(), OverlayError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window().ok_or_else(|| OverlayError::NavigationFailure("no window".to_owned()))?;
            // With `noopener` the call returns null even on success, so only
            // a thrown error counts as failure.
            window
                .open_with_url_and_target_and_features(url, "_blank", EXTERNAL_WINDOW_FEATURES)
                .map(|_| ())
                .map_err(|e| OverlayError::NavigationFailure(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = EXTERNAL_WINDOW_FEATURES;
            Err(OverlayError::NavigationFailure(format!("no browser to open {url}")))
        }
    }

    fn reload(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().reload() {
                    log::error!("page reload failed: {e:?}");
                }
            }
        }
    }
}
