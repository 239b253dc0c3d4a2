//! Animation controller: the lifecycle state machine behind the overlay.
//!
//! STATES
//! ======
//! `Idle -> Loading -> {Ready, Degraded}`, `Ready -> Loading` on a scenario
//! switch, and any state `-> Closed` on an explicit close. `dispose()` drops
//! back to `Idle` with nothing live.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on one event loop. `start()` suspends inside the engine's
//! scene load; while it is suspended, other entry points may run. Two guards
//! keep that sound:
//!
//! - `is_loading` / `is_animation_playing` drop a second `start()` while one
//!   is in flight or a scene is already playing.
//! - Every teardown advances the generation. A suspended `start()` resumes,
//!   sees its generation is no longer current, and drops its result. Engine
//!   events are tagged the same way, so a disposed session can never reach
//!   the handlers.
//!
//! State lives in `Cell`/`RefCell` and no borrow is held across an `.await`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::catalog::{ScenarioCatalog, ScenarioId};
use crate::config::OverlayConfig;
use crate::consts::{MSG_DEGRADED, MSG_NAVIGATION_FAILED, loading_message};
use crate::degraded::{DegradeReason, DegradedViewController};
use crate::engine::{EngineEvent, EngineFactory, EventHandler, InteractionEvent, InteractionTarget};
use crate::host::{Callback, ClosedView, HostSurface, Navigator, Scheduler, StatusTone};
use crate::session::{DebugReport, Generation, SceneSession, SessionError, SessionSlot};

/// Lifecycle state of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Ready,
    Degraded,
    Closed,
}

/// How a call to [`AnimationController::start`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The scene is loaded and playing.
    Ready,
    /// Loading failed; the degraded view is showing.
    Degraded,
    /// Dropped by the re-entrancy guard, or the scenario was already active.
    Skipped,
    /// A teardown happened while loading; the result was discarded.
    Superseded,
}

/// Host capabilities the controller drives.
#[derive(Clone)]
pub struct Services {
    pub host: Rc<dyn HostSurface>,
    pub navigator: Rc<dyn Navigator>,
    pub scheduler: Rc<dyn Scheduler>,
}

/// Cheap-to-clone handle to the overlay state machine.
pub struct AnimationController<F: EngineFactory + 'static> {
    inner: Rc<Inner<F>>,
}

impl<F: EngineFactory + 'static> Clone for AnimationController<F> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

struct Inner<F: EngineFactory> {
    factory: F,
    services: Services,
    catalog: ScenarioCatalog,
    config: OverlayConfig,
    state: Cell<SessionState>,
    is_loading: Cell<bool>,
    is_animation_playing: Cell<bool>,
    scenario: RefCell<ScenarioId>,
    generation: Cell<Generation>,
    session: SessionSlot<F::Engine>,
    degraded: DegradedViewController,
    status_seq: Cell<u64>,
    debug_seq: Cell<u64>,
}

impl<F: EngineFactory + 'static> AnimationController<F> {
    #[must_use]
    pub fn new(factory: F, services: Services, config: OverlayConfig) -> Self {
        let degraded = DegradedViewController::new(Rc::clone(&services.host), &config.degraded_background_url);
        let inner = Inner {
            factory,
            catalog: config.catalog(),
            scenario: RefCell::new(config.initial_scenario.clone()),
            services,
            config,
            state: Cell::new(SessionState::Idle),
            is_loading: Cell::new(false),
            is_animation_playing: Cell::new(false),
            generation: Cell::new(Generation::default()),
            session: SessionSlot::default(),
            degraded,
            status_seq: Cell::new(0),
            debug_seq: Cell::new(0),
        };
        Self { inner: Rc::new(inner) }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.inner.state.get()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.is_loading.get()
    }

    #[must_use]
    pub fn is_animation_playing(&self) -> bool {
        self.inner.is_animation_playing.get()
    }

    #[must_use]
    pub fn current_scenario(&self) -> ScenarioId {
        self.inner.scenario.borrow().clone()
    }

    #[must_use]
    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.inner.config
    }

    /// The live scene session, if one exists.
    #[must_use]
    pub fn live_session(&self) -> Option<Rc<SceneSession<F::Engine>>> {
        self.inner.session.current()
    }

    #[must_use]
    pub fn is_degraded_active(&self) -> bool {
        self.inner.degraded.is_active()
    }

    // --- Lifecycle ---

    /// Create a session for the current scenario and load its scene.
    ///
    /// Dropped while a start is in flight or a scene is playing. Any failure
    /// degrades once; nothing is retried.
    pub async fn start(&self) -> StartOutcome {
        let inner = &self.inner;
        if inner.is_loading.get() || inner.is_animation_playing.get() {
            let what = if inner.is_loading.get() { "loading" } else { "playing" };
            log::warn!("start ignored: animation already {what}");
            return StartOutcome::Skipped;
        }

        if inner.state.get() == SessionState::Closed {
            inner.services.host.clear_container();
        }
        inner.degraded.deactivate();
        let generation = self.advance_generation();
        let scenario = self.current_scenario();
        inner.state.set(SessionState::Loading);
        inner.is_loading.set(true);
        let display_name = inner.catalog.get(&scenario).display_name.clone();
        self.show_status(&loading_message(&display_name), StatusTone::Info);
        log::info!("starting animation for `{scenario}` (session {generation})");

        let result = self.bring_up(generation, scenario).await;

        if !self.is_current(generation) {
            log::info!("session {generation} superseded while loading; result dropped");
            return StartOutcome::Superseded;
        }
        inner.is_loading.set(false);

        match result {
            Ok(report) => {
                self.finish_ready(&report);
                StartOutcome::Ready
            }
            Err(SessionError::Stale) => StartOutcome::Superseded,
            Err(SessionError::Failed(err)) => {
                log::error!("animation failed to load: {err}");
                self.degrade(DegradeReason::Init(err));
                StartOutcome::Degraded
            }
        }
    }

    /// Switch to another scenario, tearing down whatever is live.
    ///
    /// A no-op when `id` is already the current scenario.
    pub async fn change_scenario(&self, id: ScenarioId) -> StartOutcome {
        let current = self.current_scenario();
        if current == id {
            log::info!("scenario `{id}` already active; switch skipped");
            return StartOutcome::Skipped;
        }
        log::info!("switching scenario `{current}` -> `{id}`");
        if !self.inner.catalog.contains(&id) {
            log::warn!("unknown scenario `{id}`; default content will be shown");
        }

        self.teardown();
        self.inner.services.host.clear_container();
        self.inner.state.set(SessionState::Idle);
        *self.inner.scenario.borrow_mut() = id.clone();
        self.inner.services.host.mark_active_scenario(&id);

        self.start().await
    }

    /// Route an interaction from either surface.
    pub fn on_interaction(&self, event: &InteractionEvent) {
        match &event.target {
            InteractionTarget::More => self.open_more(),
            InteractionTarget::Close => self.close(),
            InteractionTarget::Other(name) => {
                log::info!("interaction on `{name}` from {:?} ignored: {}", event.source, event.raw_payload);
            }
        }
    }

    /// Engine reported an error while loading or playing: degrade.
    pub fn on_engine_error(&self, message: &str) {
        let state = self.state();
        if !matches!(state, SessionState::Loading | SessionState::Ready) {
            log::warn!("engine error ignored in state {state:?}: {message}");
            return;
        }
        log::error!("engine error in state {state:?}: {message}");
        self.teardown();
        self.degrade(DegradeReason::Runtime(message.to_owned()));
    }

    /// Tear everything down and show the terminal closed surface.
    pub fn close(&self) {
        log::info!("closing overlay from state {:?}", self.state());
        self.teardown();
        let on_reload = self.weak_callback(|c| c.inner.services.navigator.reload());
        self.inner.services.host.render_closed(&ClosedView::default(), on_reload);
        self.hide_status();
        self.inner.state.set(SessionState::Closed);
    }

    /// Release every resource (page unload). Leaves the controller `Idle`.
    pub fn dispose(&self) {
        self.teardown();
        bump(&self.inner.status_seq);
        bump(&self.inner.debug_seq);
        self.inner.state.set(SessionState::Idle);
        log::info!("animation resources released");
    }

    // --- Internals ---

    async fn bring_up(&self, generation: Generation, scenario: ScenarioId) -> Result<DebugReport, SessionError> {
        let inner = &self.inner;
        let session = inner.session.create(
            &inner.factory,
            inner.services.host.as_ref(),
            &inner.config.engine_options(),
            scenario,
            generation,
            self.event_handler(generation),
        )?;
        session.load_content(&inner.catalog, &inner.config.scene_url).await
    }

    fn finish_ready(&self, report: &DebugReport) {
        self.hide_status();
        self.inner.state.set(SessionState::Ready);
        self.inner.is_animation_playing.set(true);
        self.show_debug(report);
        log::info!("animation ready for `{}`", report.scenario);
    }

    fn degrade(&self, reason: DegradeReason) {
        let inner = &self.inner;
        inner.session.dispose();
        let on_more = self.weak_callback(|c| c.on_interaction(&InteractionEvent::from_degraded(InteractionTarget::More)));
        let on_close =
            self.weak_callback(|c| c.on_interaction(&InteractionEvent::from_degraded(InteractionTarget::Close)));
        inner.degraded.activate(&reason, on_more, on_close);
        inner.state.set(SessionState::Degraded);
        inner.is_loading.set(false);
        inner.is_animation_playing.set(false);
        self.flash_status(MSG_DEGRADED, StatusTone::Warning);
    }

    /// Invalidate the current generation and release the live surface.
    fn teardown(&self) {
        let inner = &self.inner;
        self.advance_generation();
        inner.session.dispose();
        inner.degraded.deactivate();
        inner.is_loading.set(false);
        inner.is_animation_playing.set(false);
    }

    fn open_more(&self) {
        let url = &self.inner.config.more_url;
        match self.inner.services.navigator.open_external(url) {
            Ok(()) => log::info!("opened {url}"),
            Err(err) => {
                log::error!("{err}");
                self.flash_status(MSG_NAVIGATION_FAILED, StatusTone::Error);
            }
        }
    }

    fn handle_engine_event(&self, event: EngineEvent) {
        match event {
            EngineEvent::Interaction(interaction) => self.on_interaction(&interaction),
            EngineEvent::Message(message) => {
                log::info!("message from `{}`: {}", message.name, message.phrase);
            }
            EngineEvent::Diagnostic { kind, payload } => log::debug!("[{}] {payload}", kind.name()),
            EngineEvent::Error(message) => self.on_engine_error(&message),
        }
    }

    fn event_handler(&self, generation: Generation) -> EventHandler {
        let weak = Rc::downgrade(&self.inner);
        Rc::new(move |event: EngineEvent| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let controller = Self { inner };
            if !controller.is_current(generation) {
                log::debug!("event from stale session {generation} dropped: {event:?}");
                return;
            }
            controller.handle_engine_event(event);
        })
    }

    fn weak_callback(&self, action: impl Fn(&Self) + 'static) -> Callback {
        let weak: Weak<Inner<F>> = Rc::downgrade(&self.inner);
        Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                action(&Self { inner });
            }
        })
    }

    fn advance_generation(&self) -> Generation {
        let next = self.inner.generation.get().next();
        self.inner.generation.set(next);
        next
    }

    fn is_current(&self, generation: Generation) -> bool {
        self.inner.generation.get() == generation
    }

    // --- Status line and debug overlay ---

    fn show_status(&self, text: &str, tone: StatusTone) -> u64 {
        let seq = bump(&self.inner.status_seq);
        self.inner.services.host.show_status(text, tone);
        seq
    }

    fn hide_status(&self) {
        bump(&self.inner.status_seq);
        self.inner.services.host.hide_status();
    }

    /// Show a notice that hides itself unless a newer one replaced it.
    fn flash_status(&self, text: &str, tone: StatusTone) {
        let seq = self.show_status(text, tone);
        let weak = Rc::downgrade(&self.inner);
        self.inner.services.scheduler.after(
            self.inner.config.status_hide_delay(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade()
                    && inner.status_seq.get() == seq
                {
                    inner.services.host.hide_status();
                }
            }),
        );
    }

    fn show_debug(&self, report: &DebugReport) {
        if !self.inner.config.debug_overlay {
            return;
        }
        let seq = bump(&self.inner.debug_seq);
        self.inner.services.host.show_debug(report);
        let weak = Rc::downgrade(&self.inner);
        self.inner.services.scheduler.after(
            self.inner.config.debug_hide_delay(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade()
                    && inner.debug_seq.get() == seq
                {
                    inner.services.host.hide_debug();
                }
            }),
        );
    }
}

fn bump(counter: &Cell<u64>) -> u64 {
    let next = counter.get().wrapping_add(1);
    counter.set(next);
    next
}
