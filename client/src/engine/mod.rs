//! Galacean Effects binding for the overlay's engine capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page loads the engine bundle as the `ge` global. [`player`] implements
//! the core's `EngineFactory`/`EngineInstance`/`SceneGraph`/`SceneNode` traits
//! over it; [`events`] turns the engine's loosely shaped callback payloads
//! into typed `EngineEvent`s and is kept browser-free so it can be tested
//! natively.

pub mod events;

#[cfg(feature = "csr")]
mod bindings;
#[cfg(feature = "csr")]
mod player;

#[cfg(feature = "csr")]
pub use player::{GeEngine, GeFactory};
