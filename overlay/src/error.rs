//! Error taxonomy for the overlay core.
//!
//! Two layers: [`EngineError`] is what a capability implementation reports,
//! [`OverlayError`] is what the lifecycle reasons about. Only the fatal
//! variants of `OverlayError` ever reach the degraded view; mutation and
//! navigation failures are absorbed where they happen.

use crate::engine::ComponentKind;

/// Failure reported by the rendering-engine capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The engine refused to construct (no WebGL, bad options, missing bundle).
    #[error("engine construction failed: {0}")]
    Construct(String),
    /// The scene description could not be fetched or parsed.
    #[error("scene load failed: {0}")]
    Load(String),
    /// A node exists but lacks the component a mutation needs.
    #[error("node has no {0} component")]
    MissingComponent(ComponentKind),
    /// A texture could not be fetched or bound.
    #[error("texture update failed: {0}")]
    Texture(String),
    /// Any other engine call that threw.
    #[error("engine call failed: {0}")]
    Call(String),
}

/// Lifecycle-level error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// The host page has no animation container element.
    #[error("animation container not found")]
    ContainerMissing,
    /// The engine bundle is absent or refused to construct.
    #[error("rendering engine unavailable: {0}")]
    EngineUnavailable(String),
    /// The scene could not be loaded, or loaded to nothing.
    #[error("scene load failed: {0}")]
    SceneLoadFailure(String),
    /// A best-effort text or texture update failed. Never fatal.
    #[error("content update on `{node}` failed: {reason}")]
    ContentMutationFailure { node: String, reason: String },
    /// Opening the external link failed. Never fatal.
    #[error("navigation failed: {0}")]
    NavigationFailure(String),
}

impl OverlayError {
    /// Whether this error ends the session and routes to the degraded view.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ContainerMissing | Self::EngineUnavailable(_) | Self::SceneLoadFailure(_))
    }

    pub(crate) fn mutation(node: &str, reason: impl ToString) -> Self {
        Self::ContentMutationFailure { node: node.to_owned(), reason: reason.to_string() }
    }
}

/// Error returned by [`crate::config::OverlayConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the schema.
    #[error("invalid overlay configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
