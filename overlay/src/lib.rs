//! Scene lifecycle core for the purchase-celebration overlay.
//!
//! This crate owns every decision the overlay makes: which scenario content to
//! inject, when a scene session is created or torn down, how engine failures
//! degrade to the static view, and how interactions from either surface are
//! routed. It never touches the DOM or the animation engine directly; both are
//! reached through the capability traits in [`engine`] and [`host`], so the
//! whole state machine runs natively under test. The `client` crate supplies
//! the browser implementations.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Top-level [`controller::AnimationController`] state machine |
//! | [`session`] | One live engine instance bound to one scenario |
//! | [`degraded`] | Static fallback surface with two buttons |
//! | [`catalog`] | Scenario id to content variant lookup |
//! | [`engine`] | Rendering-engine capability traits and event types |
//! | [`host`] | Host surface, navigation, and timer capabilities |
//! | [`config`] | Serde-backed overlay configuration |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Node names, asset paths, user-facing strings, delays |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod controller;
pub mod degraded;
pub mod engine;
pub mod error;
pub mod host;
pub mod session;

#[cfg(test)]
#[path = "fakes_test.rs"]
pub(crate) mod fakes;

pub use catalog::{ContentVariant, ScenarioCatalog, ScenarioId};
pub use config::OverlayConfig;
pub use controller::{AnimationController, Services, SessionState, StartOutcome};
pub use error::{EngineError, OverlayError};
