//! Browser front end for the purchase-celebration overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled to WASM with the `csr` feature and mounted on `<body>`. The
//! `overlay` crate makes every lifecycle decision; this crate supplies the
//! browser side of its capabilities and the reactive chrome around the
//! animation stage.
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and controller wiring |
//! | [`components`] | Scenario bar, stage, status line, debug overlay |
//! | [`engine`] | `ge.Player` binding |
//! | [`host`] | Host surface, navigator, scheduler |
//! | [`state`] | Stage signal model |
//! | [`util`] | Page configuration |

pub mod app;
pub mod components;
pub mod engine;
pub mod host;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
