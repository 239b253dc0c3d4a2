//! Page chrome around the animation stage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `RwSignal<StageState>` and `StageActions` from context.
//! They never talk to the controller directly; scenario clicks go out through
//! the callback the app hands to [`scenario_bar::ScenarioBar`].

pub mod debug_overlay;
pub mod scenario_bar;
pub mod stage;
pub mod status_text;
