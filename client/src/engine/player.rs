//! Engine capability over `ge.Player`.
//!
//! DESIGN
//! ======
//! Callbacks handed to the player are converted with `Closure::into_js_value`
//! so JS owns them. The controller disposes a session from inside a click
//! callback; a Rust-owned closure would be dropped mid-call.
//!
//! `onError` is a constructor option, but error subscribers arrive after
//! construction, so it forwards to an [`ErrorRelay`] filled by `subscribe`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use overlay::engine::{
    ComponentKind, EngineEventKind, EngineFactory, EngineInstance, EngineOptions, EventHandler,
    SceneGraph, SceneNode, SceneVariables,
};
use overlay::error::EngineError;
use serde_json::{Map, Number, Value};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::bindings::{self, Composition, Player, SpriteComponent, TextComponent, VfxItem};
use super::events::{PAYLOAD_FIELDS, engine_event, is_interactive_item};

// =============================================================
// JS value helpers
// =============================================================

fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

fn scalar(value: &JsValue) -> Option<Value> {
    if let Some(text) = value.as_string() {
        return Some(Value::String(text));
    }
    if let Some(flag) = value.as_bool() {
        return Some(Value::Bool(flag));
    }
    value.as_f64().and_then(Number::from_f64).map(Value::Number)
}

/// Copy the known scalar fields of a callback payload into JSON.
fn summarize(payload: &JsValue) -> Value {
    if let Some(value) = scalar(payload) {
        return value;
    }
    if !payload.is_object() {
        return Value::Null;
    }
    let mut fields = Map::new();
    for key in PAYLOAD_FIELDS {
        let Ok(field) = Reflect::get(payload, &JsValue::from_str(key)) else {
            continue;
        };
        if let Some(value) = scalar(&field) {
            fields.insert(key.to_owned(), value);
        }
    }
    Value::Object(fields)
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), EngineError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| EngineError::Construct(format!("option `{key}`: {}", describe(&e))))
}

fn forwarder(kind: EngineEventKind, handler: EventHandler) -> JsValue {
    Closure::<dyn Fn(JsValue)>::new(move |payload: JsValue| handler(engine_event(kind, summarize(&payload))))
        .into_js_value()
}

// =============================================================
// Factory
// =============================================================

/// Error subscribers registered after the player was constructed.
#[derive(Clone, Default)]
struct ErrorRelay(Rc<RefCell<Vec<EventHandler>>>);

impl ErrorRelay {
    fn push(&self, handler: EventHandler) {
        self.0.borrow_mut().push(handler);
    }

    fn emit(&self, payload: &JsValue) {
        let handlers: Vec<EventHandler> = self.0.borrow().clone();
        let event = engine_event(EngineEventKind::Error, summarize(payload));
        for handler in handlers {
            handler(event.clone());
        }
    }
}

/// Constructs players from the page's `ge` bundle.
pub struct GeFactory;

impl EngineFactory for GeFactory {
    type Engine = GeEngine;

    fn is_available(&self) -> bool {
        bindings::namespace_member("Player").is_some_and(|player| player.is_function())
    }

    fn construct(&self, options: &EngineOptions) -> Result<GeEngine, EngineError> {
        let container = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&options.container_id))
            .ok_or_else(|| EngineError::Construct(format!("no element #{}", options.container_id)))?;
        let pixel_ratio = options
            .pixel_ratio
            .or_else(|| web_sys::window().map(|w| w.device_pixel_ratio()))
            .filter(|ratio| *ratio > 0.0)
            .unwrap_or(1.0);

        let errors = ErrorRelay::default();
        let relay = errors.clone();
        let on_error = Closure::<dyn Fn(JsValue)>::new(move |error: JsValue| relay.emit(&error)).into_js_value();

        let js_options = Object::new();
        set(&js_options, "container", &container)?;
        set(&js_options, "interactive", &JsValue::from_bool(options.interactive))?;
        set(&js_options, "pixelRatio", &JsValue::from_f64(pixel_ratio))?;
        set(&js_options, "renderFramework", &JsValue::from_str(&options.render_framework))?;
        set(&js_options, "env", &JsValue::from_str(&options.env))?;
        set(&js_options, "onError", &on_error)?;

        let player = Player::new(&js_options).map_err(|e| EngineError::Construct(describe(&e)))?;
        log::debug!("ge.Player constructed in #{} (pixel ratio {pixel_ratio})", options.container_id);
        Ok(GeEngine {
            inner: Rc::new(EngineInner {
                player,
                interactive: options.interactive,
                errors,
                disposed: Cell::new(false),
            }),
        })
    }
}

// =============================================================
// Engine
// =============================================================

struct EngineInner {
    player: Player,
    interactive: bool,
    errors: ErrorRelay,
    disposed: Cell<bool>,
}

/// Shared handle to one `ge.Player`.
#[derive(Clone)]
pub struct GeEngine {
    inner: Rc<EngineInner>,
}

impl EngineInstance for GeEngine {
    type Scene = GeScene;

    fn subscribe(&self, kind: EngineEventKind, handler: EventHandler) {
        if kind == EngineEventKind::Error {
            self.inner.errors.push(handler);
            return;
        }
        let callback = forwarder(kind, handler);
        self.inner.player.on(kind.name(), callback.unchecked_ref());
    }

    async fn load_scene(&self, url: &str, variables: &SceneVariables) -> Result<Option<GeScene>, EngineError> {
        let variables = js_sys::JSON::parse(&variables.to_json().to_string())
            .map_err(|e| EngineError::Load(format!("variables: {}", describe(&e))))?;
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("variables"), &variables)
            .map_err(|e| EngineError::Load(describe(&e)))?;

        let player = self.inner.player.clone();
        let composition = player.load_scene(url, &options).await.map_err(|e| EngineError::Load(describe(&e)))?;
        if bindings::is_absent(&composition) {
            return Ok(None);
        }
        Ok(Some(GeScene { composition: composition.unchecked_into() }))
    }

    fn is_interactive(&self) -> bool {
        self.inner.player.interactive().as_bool().unwrap_or(self.inner.interactive)
    }

    fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        self.inner.player.dispose();
        log::debug!("ge.Player disposed");
    }
}

// =============================================================
// Scene graph
// =============================================================

pub struct GeScene {
    composition: Composition,
}

impl GeScene {
    fn items(&self) -> Array {
        let items = self.composition.items();
        if Array::is_array(&items) { items.unchecked_into() } else { Array::new() }
    }
}

impl SceneGraph for GeScene {
    type Node = GeNode;

    fn node_by_name(&self, name: &str) -> Option<GeNode> {
        let item = self.composition.get_item_by_name(name);
        (!bindings::is_absent(&item)).then(|| GeNode { item: item.unchecked_into() })
    }

    fn item_count(&self) -> usize {
        self.items().length() as usize
    }

    fn interactive_item_count(&self) -> usize {
        self.items().iter().filter(|item| is_interactive_item(&summarize(item))).count()
    }
}

pub struct GeNode {
    item: VfxItem,
}

impl GeNode {
    fn component(&self, kind: ComponentKind) -> Result<JsValue, EngineError> {
        let class = match kind {
            ComponentKind::Text => "TextComponent",
            ComponentKind::Sprite => "SpriteComponent",
        };
        let constructor = bindings::namespace_member(class).ok_or(EngineError::MissingComponent(kind))?;
        let component = self.item.get_component(&constructor);
        if bindings::is_absent(&component) { Err(EngineError::MissingComponent(kind)) } else { Ok(component) }
    }
}

impl SceneNode for GeNode {
    fn set_text(&self, text: &str) -> Result<(), EngineError> {
        let component: TextComponent = self.component(ComponentKind::Text)?.unchecked_into();
        component.set_text(text).map_err(|e| EngineError::Call(describe(&e)))
    }

    async fn set_texture(&self, url: &str) -> Result<(), EngineError> {
        let component: SpriteComponent = self.component(ComponentKind::Sprite)?.unchecked_into();
        component.set_texture(url).await.map(|_| ()).map_err(|e| EngineError::Texture(describe(&e)))
    }
}

