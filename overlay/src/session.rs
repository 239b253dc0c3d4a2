//! Scene session: exactly one live engine instance bound to one scenario.
//!
//! DESIGN
//! ======
//! A session is created synchronously (construct + subscribe) and then loads
//! its content asynchronously. The controller may dispose it while a load is
//! suspended inside the engine; the engine call is not aborted, so the session
//! checks its disposed flag after every suspension point and reports
//! [`SessionError::Stale`] instead of touching a torn-down scene.
//!
//! Text and texture updates after load are a best-effort backstop for nodes
//! that ignore load-time substitution. Their failures are logged and dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::catalog::{ScenarioCatalog, ScenarioId};
use crate::consts::{NODE_CLOSE, NODE_MORE};
use crate::engine::{
    EngineEvent, EngineEventKind, EngineFactory, EngineInstance, EngineOptions, EventHandler, NodeOf, SceneGraph,
    SceneNode, SceneVariables,
};
use crate::error::OverlayError;
use crate::host::HostSurface;

/// Token distinguishing successive sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error from [`SceneSession::load_content`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Failed(#[from] OverlayError),
    /// The session was disposed while the load was suspended.
    #[error("session disposed while loading")]
    Stale,
}

/// The two hotspots, whichever of them the scene has.
pub struct InteractiveNodes<N> {
    pub more: Option<N>,
    pub close: Option<N>,
}

impl<N> Default for InteractiveNodes<N> {
    fn default() -> Self {
        Self { more: None, close: None }
    }
}

/// Diagnostic summary of a loaded session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugReport {
    pub scenario: String,
    pub content_url: String,
    pub button_bg_url: String,
    pub button_label: String,
    pub more_found: bool,
    pub close_found: bool,
    pub interactive_items: usize,
    pub engine_interactive: bool,
}

pub struct SceneSession<E: EngineInstance> {
    engine: E,
    generation: Generation,
    scenario: ScenarioId,
    scene: RefCell<Option<E::Scene>>,
    nodes: RefCell<InteractiveNodes<NodeOf<E>>>,
    disposed: Cell<bool>,
}

impl<E: EngineInstance> SceneSession<E> {
    /// Construct an engine in the host container and wire its events.
    ///
    /// Click and message events and engine errors go to `handler`; pointer
    /// diagnostics are only logged.
    ///
    /// # Errors
    ///
    /// [`OverlayError::ContainerMissing`] without a container,
    /// [`OverlayError::EngineUnavailable`] if the factory is absent or throws.
    pub fn create<F>(
        factory: &F,
        host: &dyn HostSurface,
        options: &EngineOptions,
        scenario: ScenarioId,
        generation: Generation,
        handler: EventHandler,
    ) -> Result<Self, OverlayError>
    where
        F: EngineFactory<Engine = E>,
    {
        if !host.has_container() {
            return Err(OverlayError::ContainerMissing);
        }
        if !factory.is_available() {
            return Err(OverlayError::EngineUnavailable("engine bundle not loaded".to_owned()));
        }

        let options = EngineOptions { interactive: true, ..options.clone() };
        let engine = factory
            .construct(&options)
            .map_err(|e| OverlayError::EngineUnavailable(e.to_string()))?;

        for kind in [EngineEventKind::Click, EngineEventKind::Message, EngineEventKind::Error] {
            engine.subscribe(kind, Rc::clone(&handler));
        }
        for kind in EngineEventKind::DIAGNOSTIC {
            engine.subscribe(
                kind,
                Rc::new(move |event: EngineEvent| log::debug!("[{}] {event:?}", kind.name())),
            );
        }

        log::info!("scene session {generation} created for scenario `{scenario}`");
        Ok(Self {
            engine,
            generation,
            scenario,
            scene: RefCell::new(None),
            nodes: RefCell::new(InteractiveNodes::default()),
            disposed: Cell::new(false),
        })
    }

    /// Load the scene with this session's scenario content substituted.
    ///
    /// # Errors
    ///
    /// [`SessionError::Failed`] with [`OverlayError::SceneLoadFailure`] when
    /// the engine throws or produces no scene; [`SessionError::Stale`] when
    /// the session was disposed mid-load.
    pub async fn load_content(&self, catalog: &ScenarioCatalog, scene_url: &str) -> Result<DebugReport, SessionError> {
        let variant = catalog.get(&self.scenario);
        let images = variant.image_variables();
        let texts = variant.text_variables();
        let variables = images.merged(&texts);
        log::debug!("loading {scene_url} with variables {}", variables.to_json());

        let loaded = self
            .engine
            .load_scene(scene_url, &variables)
            .await
            .map_err(|e| OverlayError::SceneLoadFailure(e.to_string()))?;
        self.ensure_live()?;
        let scene = loaded.ok_or_else(|| OverlayError::SceneLoadFailure("engine returned no scene".to_owned()))?;

        absorb_failures(apply_text_variables(&scene, &texts), "text backstop")?;
        if !self.scenario.is_default() {
            absorb_failures(apply_texture_variables(&scene, &images, &self.disposed).await, "texture backstop")?;
            self.ensure_live()?;
        }

        *self.nodes.borrow_mut() = locate_interactive_nodes(&scene);
        let (more_found, close_found) = self.hotspots();
        let report = DebugReport {
            scenario: self.scenario.to_string(),
            content_url: variant.primary_image_url.clone(),
            button_bg_url: variant.button_background_primary_url.clone(),
            button_label: variant.button_label.clone(),
            more_found,
            close_found,
            interactive_items: scene.interactive_item_count(),
            engine_interactive: self.engine.is_interactive(),
        };
        log::info!(
            "scene loaded for `{}`: {} items, {} interactive",
            self.scenario,
            scene.item_count(),
            report.interactive_items
        );

        *self.scene.borrow_mut() = Some(scene);
        Ok(report)
    }

    /// Release the engine and node references. Safe to call repeatedly.
    pub fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        *self.nodes.borrow_mut() = InteractiveNodes::default();
        let scene = self.scene.borrow_mut().take();
        drop(scene);
        self.engine.dispose();
        log::info!("scene session {} disposed", self.generation);
    }

    #[must_use]
    pub fn scenario(&self) -> &ScenarioId {
        &self.scenario
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Whether a scene is loaded and held.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.scene.borrow().is_some()
    }

    /// Which hotspots were found: `(more, close)`.
    #[must_use]
    pub fn hotspots(&self) -> (bool, bool) {
        let nodes = self.nodes.borrow();
        (nodes.more.is_some(), nodes.close.is_some())
    }

    fn ensure_live(&self) -> Result<(), SessionError> {
        if self.disposed.get() { Err(SessionError::Stale) } else { Ok(()) }
    }
}

/// Holder for the single live session.
///
/// Creating through the slot always disposes the previous occupant first.
pub struct SessionSlot<E: EngineInstance> {
    current: RefCell<Option<Rc<SceneSession<E>>>>,
}

impl<E: EngineInstance> Default for SessionSlot<E> {
    fn default() -> Self {
        Self { current: RefCell::new(None) }
    }
}

impl<E: EngineInstance> SessionSlot<E> {
    /// Dispose any occupant, then create and hold a new session.
    ///
    /// # Errors
    ///
    /// Propagates [`SceneSession::create`] errors; the slot is left empty.
    pub fn create<F>(
        &self,
        factory: &F,
        host: &dyn HostSurface,
        options: &EngineOptions,
        scenario: ScenarioId,
        generation: Generation,
        handler: EventHandler,
    ) -> Result<Rc<SceneSession<E>>, OverlayError>
    where
        F: EngineFactory<Engine = E>,
    {
        self.dispose();
        let session = Rc::new(SceneSession::create(factory, host, options, scenario, generation, handler)?);
        *self.current.borrow_mut() = Some(Rc::clone(&session));
        Ok(session)
    }

    #[must_use]
    pub fn current(&self) -> Option<Rc<SceneSession<E>>> {
        self.current.borrow().clone()
    }

    /// Dispose and drop the occupant, if any.
    pub fn dispose(&self) {
        let previous = self.current.borrow_mut().take();
        if let Some(session) = previous {
            session.dispose();
        }
    }
}

/// Log the non-fatal failures of a backstop step; the first fatal one ends
/// the load.
fn absorb_failures(failures: Vec<OverlayError>, step: &str) -> Result<(), OverlayError> {
    for failure in failures {
        if failure.is_fatal() {
            return Err(failure);
        }
        log::warn!("{step} skipped: {failure}");
    }
    Ok(())
}

/// Apply text values through each node's text component.
///
/// Returns the failures; none of them are fatal.
pub fn apply_text_variables<S: SceneGraph>(scene: &S, texts: &SceneVariables) -> Vec<OverlayError> {
    let mut failures = Vec::new();
    for (name, value) in texts.iter() {
        let Some(text) = value.text() else {
            continue;
        };
        let Some(node) = scene.node_by_name(name) else {
            failures.push(OverlayError::mutation(name, "node not found"));
            continue;
        };
        match node.set_text(text) {
            Ok(()) => log::debug!("set text on `{name}`: {text:?}"),
            Err(e) => failures.push(OverlayError::mutation(name, e)),
        }
    }
    failures
}

/// Apply the primary URL of each image value through each node's sprite
/// component. Stops early once `disposed` is set.
///
/// Returns the failures; none of them are fatal.
pub async fn apply_texture_variables<S: SceneGraph>(
    scene: &S,
    images: &SceneVariables,
    disposed: &Cell<bool>,
) -> Vec<OverlayError> {
    let mut failures = Vec::new();
    for (name, value) in images.iter() {
        if disposed.get() {
            break;
        }
        let Some(url) = value.primary_url() else {
            continue;
        };
        let Some(node) = scene.node_by_name(name) else {
            failures.push(OverlayError::mutation(name, "node not found"));
            continue;
        };
        match node.set_texture(url).await {
            Ok(()) => log::debug!("set texture on `{name}`: {url}"),
            Err(e) => failures.push(OverlayError::mutation(name, e)),
        }
    }
    failures
}

/// Find the `more` and `close` hotspots. Missing ones are logged, not fatal.
pub fn locate_interactive_nodes<S: SceneGraph>(scene: &S) -> InteractiveNodes<S::Node> {
    let more = scene.node_by_name(NODE_MORE);
    let close = scene.node_by_name(NODE_CLOSE);
    if more.is_none() {
        log::warn!("interactive node `{NODE_MORE}` not found");
    }
    if close.is_none() {
        log::warn!("interactive node `{NODE_CLOSE}` not found");
    }
    InteractiveNodes { more, close }
}
