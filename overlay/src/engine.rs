//! Rendering-engine capability: the only surface through which the core talks
//! to the animation engine.
//!
//! The engine is an external collaborator. It constructs against a host
//! container, loads a scene description with substitution variables, exposes
//! named nodes, and emits interaction events. Events are delivered as the
//! [`EngineEvent`] tagged union instead of string-keyed callbacks, so the
//! state machine never depends on the engine's event vocabulary.
//!
//! Everything here is single-threaded: handlers are `Rc`, futures are not
//! `Send`, and the traits use `async fn` directly.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{CONTAINER_ID, NODE_CLOSE, NODE_MORE};
use crate::error::EngineError;

// =============================================================
// Components
// =============================================================

/// Component kinds the core mutates on scene nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Text component (`setText`).
    Text,
    /// Sprite component (`setTexture`).
    Sprite,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Sprite => f.write_str("sprite"),
        }
    }
}

// =============================================================
// Substitution variables
// =============================================================

/// A single substitution value keyed by node name.
///
/// Image values are `[primary, fallback]` pairs; the engine falls back to the
/// second URL when the first cannot be fetched. Text values are literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Image([String; 2]),
    Text(String),
}

impl VariableValue {
    /// Primary URL of an image pair.
    #[must_use]
    pub fn primary_url(&self) -> Option<&str> {
        match self {
            Self::Image([primary, _]) => Some(primary),
            Self::Text(_) => None,
        }
    }

    /// Literal text of a text value.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }
}

/// Variable set passed to [`EngineInstance::load_scene`].
///
/// Serializes to the engine's `variables` object: arrays for image pairs,
/// strings for text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SceneVariables(BTreeMap<String, VariableValue>);

impl SceneVariables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_image(&mut self, node: &str, primary: &str, fallback: &str) {
        self.0.insert(node.to_owned(), VariableValue::Image([primary.to_owned(), fallback.to_owned()]));
    }

    pub fn insert_text(&mut self, node: &str, text: &str) {
        self.0.insert(node.to_owned(), VariableValue::Text(text.to_owned()));
    }

    #[must_use]
    pub fn get(&self, node: &str) -> Option<&VariableValue> {
        self.0.get(node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Union of both sets. Keys in `other` win on collision.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut out = self.0.clone();
        out.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(out)
    }

    /// JSON form handed to the engine.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| {
                    let value = match v {
                        VariableValue::Image(pair) => Value::from(pair.to_vec()),
                        VariableValue::Text(text) => Value::from(text.as_str()),
                    };
                    (k.clone(), value)
                })
                .collect(),
        )
    }
}

/// Join a scene directory and file into an engine URL, percent-encoding the
/// literal spaces the authored asset paths contain.
#[must_use]
pub fn scene_asset_url(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    let file = file.trim_start_matches('/');
    format!("{dir}/{file}").replace(' ', "%20")
}

// =============================================================
// Events
// =============================================================

/// Which interactive element an interaction targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionTarget {
    More,
    Close,
    Other(String),
}

impl InteractionTarget {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            NODE_MORE => Self::More,
            NODE_CLOSE => Self::Close,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::More => NODE_MORE,
            Self::Close => NODE_CLOSE,
            Self::Other(name) => name,
        }
    }
}

/// Which surface produced an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionSource {
    Engine,
    Degraded,
}

/// A click on a named target, from the engine or the degraded view.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionEvent {
    pub target: InteractionTarget,
    pub raw_payload: Value,
    pub source: InteractionSource,
}

impl InteractionEvent {
    /// Interaction reported by the engine for the node called `name`.
    #[must_use]
    pub fn from_engine(name: &str, raw_payload: Value) -> Self {
        Self { target: InteractionTarget::from_name(name), raw_payload, source: InteractionSource::Engine }
    }

    /// Interaction from one of the degraded view's buttons.
    #[must_use]
    pub fn from_degraded(target: InteractionTarget) -> Self {
        Self { target, raw_payload: Value::Null, source: InteractionSource::Degraded }
    }
}

/// Message-class event emitted by message items in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    pub name: String,
    pub phrase: Value,
}

/// Event kinds a caller can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEventKind {
    Click,
    Message,
    ItemClicked,
    Tap,
    Touch,
    MouseDown,
    MouseUp,
    Error,
}

impl EngineEventKind {
    /// Pointer-level kinds that are only ever logged.
    pub const DIAGNOSTIC: [Self; 5] = [Self::ItemClicked, Self::Tap, Self::Touch, Self::MouseDown, Self::MouseUp];

    /// Event name in the engine's own vocabulary.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Message => "message",
            Self::ItemClicked => "itemClicked",
            Self::Tap => "tap",
            Self::Touch => "touch",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::Error => "error",
        }
    }
}

/// Event delivered by the engine to a subscribed handler.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Interaction(InteractionEvent),
    Message(MessageEvent),
    Diagnostic { kind: EngineEventKind, payload: Value },
    Error(String),
}

/// Subscriber callback. Single-threaded.
pub type EventHandler = Rc<dyn Fn(EngineEvent)>;

// =============================================================
// Capabilities
// =============================================================

/// Options the engine is constructed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Id of the host element the engine mounts into.
    pub container_id: String,
    /// Whether the engine reports clicks on interactive items.
    pub interactive: bool,
    /// Render scale; `None` uses the device pixel ratio.
    pub pixel_ratio: Option<f64>,
    pub render_framework: String,
    pub env: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_owned(),
            interactive: true,
            pixel_ratio: None,
            render_framework: "webgl".to_owned(),
            env: "editor".to_owned(),
        }
    }
}

/// Constructs engine instances.
pub trait EngineFactory {
    type Engine: EngineInstance;

    /// Whether the engine bundle is present at all.
    fn is_available(&self) -> bool;

    /// Construct an engine mounted into `options.container_id`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Construct`] if the engine throws.
    fn construct(&self, options: &EngineOptions) -> Result<Self::Engine, EngineError>;
}

/// One live engine. Handles are cheap to clone and share the instance.
pub trait EngineInstance: Clone + 'static {
    type Scene: SceneGraph;

    /// Register `handler` for events of `kind`.
    fn subscribe(&self, kind: EngineEventKind, handler: EventHandler);

    /// Load a scene description with `variables` substituted at load time.
    ///
    /// `Ok(None)` means the engine completed without producing a scene.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the engine throws while loading.
    async fn load_scene(&self, url: &str, variables: &SceneVariables) -> Result<Option<Self::Scene>, EngineError>;

    /// Whether interaction listening is active.
    fn is_interactive(&self) -> bool;

    /// Release the engine and everything it rendered.
    fn dispose(&self);
}

/// A loaded scene graph.
pub trait SceneGraph {
    type Node: SceneNode;

    fn node_by_name(&self, name: &str) -> Option<Self::Node>;

    /// Total number of items in the scene.
    fn item_count(&self) -> usize;

    /// Number of interactive items in the scene.
    fn interactive_item_count(&self) -> usize;
}

/// A named node inside a scene graph.
pub trait SceneNode {
    /// Replace the text of the node's text component.
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingComponent`] if the node has no text component,
    /// or [`EngineError::Call`] if the engine throws.
    fn set_text(&self, text: &str) -> Result<(), EngineError>;

    /// Replace the texture of the node's sprite component.
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingComponent`] if the node has no sprite component,
    /// or [`EngineError::Texture`] if the image cannot be fetched.
    async fn set_texture(&self, url: &str) -> Result<(), EngineError>;
}

/// Node type of an engine's scenes.
pub type NodeOf<E> = <<E as EngineInstance>::Scene as SceneGraph>::Node;
