//! Raw `wasm-bindgen` declarations for the `ge` global.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `ge.Player`: one engine instance mounted into a container element.
    #[wasm_bindgen(js_namespace = ge)]
    #[derive(Clone, Debug)]
    pub type Player;

    #[wasm_bindgen(constructor, js_namespace = ge, catch)]
    pub fn new(options: &Object) -> Result<Player, JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &Player, event: &str, handler: &Function);

    #[wasm_bindgen(method, catch, js_name = loadScene)]
    pub async fn load_scene(this: &Player, url: &str, options: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter)]
    pub fn interactive(this: &Player) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn dispose(this: &Player);

    /// A loaded scene.
    #[wasm_bindgen(extends = Object)]
    #[derive(Clone, Debug)]
    pub type Composition;

    #[wasm_bindgen(method, js_name = getItemByName)]
    pub fn get_item_by_name(this: &Composition, name: &str) -> JsValue;

    #[wasm_bindgen(method, getter)]
    pub fn items(this: &Composition) -> JsValue;

    /// A named scene item.
    #[wasm_bindgen(extends = Object)]
    #[derive(Clone, Debug)]
    pub type VfxItem;

    #[wasm_bindgen(method, js_name = getComponent)]
    pub fn get_component(this: &VfxItem, component: &JsValue) -> JsValue;

    #[wasm_bindgen(extends = Object)]
    pub type TextComponent;

    #[wasm_bindgen(method, catch, js_name = setText)]
    pub fn set_text(this: &TextComponent, text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(extends = Object)]
    pub type SpriteComponent;

    #[wasm_bindgen(method, catch, js_name = setTexture)]
    pub async fn set_texture(this: &SpriteComponent, url: &str) -> Result<JsValue, JsValue>;
}

/// `ge[name]`, when the bundle is loaded and exports it.
pub fn namespace_member(name: &str) -> Option<JsValue> {
    let ge = Reflect::get(&js_sys::global(), &JsValue::from_str("ge")).ok()?;
    if ge.is_undefined() || ge.is_null() {
        return None;
    }
    let member = Reflect::get(&ge, &JsValue::from_str(name)).ok()?;
    (!member.is_undefined()).then_some(member)
}

/// `null`/`undefined` check for values the engine returns instead of throwing.
pub fn is_absent(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}
