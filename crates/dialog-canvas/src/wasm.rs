//! WASM exports for the widget manager
//!
//! Wraps [`Manager`] in a JS-friendly API. Structured values cross the
//! boundary as JSON strings.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::error::UiError;
use crate::input::Key;
use crate::manager::Manager;
use crate::style::Style;
use crate::widget::WidgetConfig;
use crate::ManagerConfig;

fn to_js(err: UiError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse<T: serde::de::DeserializeOwned>(what: &str, json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Malformed {} JSON: {}", what, e)))
}

#[derive(Default)]
struct RedrawTarget {
    pending: Cell<bool>,
    callback: RefCell<Option<js_sys::Function>>,
}

/// Delivers redraw requests to JS from a microtask, once the exported
/// call that raised them has returned and released the controller.
/// Requests raised before delivery coalesce into one callback.
struct RedrawSignal {
    target: Rc<RedrawTarget>,
    deliver: Closure<dyn FnMut(JsValue)>,
}

impl RedrawSignal {
    fn new() -> Self {
        let target = Rc::new(RedrawTarget::default());
        let shared = Rc::clone(&target);
        let deliver = Closure::wrap(Box::new(move |_: JsValue| {
            shared.pending.set(false);
            let callback = shared.callback.borrow().clone();
            if let Some(callback) = callback {
                if let Err(err) = callback.call0(&JsValue::NULL) {
                    web_sys::console::error_2(&JsValue::from_str("redraw callback failed:"), &err);
                }
            }
        }) as Box<dyn FnMut(JsValue)>);
        Self { target, deliver }
    }

    fn set_callback(&self, callback: js_sys::Function) {
        *self.target.callback.borrow_mut() = Some(callback);
    }

    fn schedule(&self) {
        if self.target.pending.replace(true) {
            return;
        }
        let _ = js_sys::Promise::resolve(&JsValue::NULL).then(&self.deliver);
    }
}

/// Widget manager controller for WASM
#[wasm_bindgen]
pub struct UiController {
    manager: Manager,
    redraw: Rc<RedrawSignal>,
}

#[wasm_bindgen]
impl UiController {
    /// Create a controller for a canvas surface of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_manager(Manager::new(ManagerConfig::new(width, height)))
    }

    /// Create a controller sized to a canvas element
    #[wasm_bindgen]
    pub fn for_canvas(canvas: &HtmlCanvasElement) -> Self {
        Self::new(canvas.width() as f32, canvas.height() as f32)
    }

    /// Create a controller from a `ManagerConfig` JSON object
    #[wasm_bindgen]
    pub fn with_config(json: &str) -> Result<UiController, JsValue> {
        let config: ManagerConfig = parse("config", json)?;
        Ok(Self::from_manager(Manager::new(config)))
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Register a style from its blueprint JSON
    #[wasm_bindgen]
    pub fn register_style(&mut self, name: &str, json: &str) -> Result<(), JsValue> {
        let style: Style = parse("style", json)?;
        self.manager.register_style(name, style);
        Ok(())
    }

    /// Open a dialog from a widget config JSON
    #[wasm_bindgen]
    pub fn open_root(&mut self, json: &str) -> Result<u64, JsValue> {
        let config: WidgetConfig = parse("widget", json)?;
        let id = self.manager.open_root(config).map_err(to_js)?;
        self.flush_warnings();
        Ok(id)
    }

    /// Add a widget inside `parent`
    #[wasm_bindgen]
    pub fn add_widget(&mut self, parent: u64, json: &str) -> Result<u64, JsValue> {
        let config: WidgetConfig = parse("widget", json)?;
        let id = self.manager.add_widget(parent, config).map_err(to_js)?;
        self.flush_warnings();
        Ok(id)
    }

    /// Close a widget and everything inside it
    #[wasm_bindgen]
    pub fn close(&mut self, id: u64) -> Result<(), JsValue> {
        self.manager.close(id).map_err(to_js)?;
        self.flush_warnings();
        Ok(())
    }

    /// Resize the canvas surface
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.manager.resize(width, height);
        self.flush_warnings();
    }

    /// Rebuild hit maps left dirty by drags
    #[wasm_bindgen]
    pub fn rebuild_maps(&mut self) {
        self.manager.rebuild_maps();
        self.flush_warnings();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Pointer moved; returns InputResult JSON
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.manager.pointer_move(x, y);
        self.flush_warnings();
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Button pressed; returns InputResult JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        let result = self.manager.pointer_down(x, y);
        self.flush_warnings();
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Button released; returns InputResult JSON
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f32, y: f32) -> String {
        let result = self.manager.pointer_up(x, y);
        self.flush_warnings();
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Key code for the focused widget. Returns true if it was delivered.
    #[wasm_bindgen]
    pub fn key(&mut self, code: u32) -> bool {
        self.manager.key_code(code).is_handled()
    }

    /// Typed text for the focused widget, one character at a time
    #[wasm_bindgen]
    pub fn text(&mut self, input: &str) -> bool {
        let mut handled = false;
        for c in input.chars() {
            handled |= self.manager.key(Key::Char(c)).is_handled();
        }
        handled
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Widgets to draw, back to front, as JSON
    #[wasm_bindgen]
    pub fn render_list_json(&self) -> String {
        serde_json::to_string(&self.manager.render_list()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Events since the last call, as JSON
    #[wasm_bindgen]
    pub fn drain_events_json(&mut self) -> String {
        serde_json::to_string(&self.manager.drain_events()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Check and reset the pending redraw flag
    #[wasm_bindgen]
    pub fn take_redraw(&mut self) -> bool {
        self.manager.take_redraw()
    }

    /// Invoke `callback` after calls that request a redraw. The callback
    /// runs from a microtask, so it may read the controller back.
    #[wasm_bindgen]
    pub fn set_redraw_callback(&mut self, callback: js_sys::Function) {
        self.redraw.set_callback(callback);
        let signal = Rc::clone(&self.redraw);
        self.manager.set_redraw_handler(move || signal.schedule());
    }

    /// Id of the widget receiving keys
    #[wasm_bindgen]
    pub fn focused_widget(&self) -> Option<u64> {
        self.manager.focused_widget()
    }

    /// Deepest widget at a canvas point
    #[wasm_bindgen]
    pub fn widget_at(&self, x: f32, y: f32) -> Option<u64> {
        self.manager.widget_at(x, y)
    }

    fn from_manager(manager: Manager) -> Self {
        Self {
            manager,
            redraw: Rc::new(RedrawSignal::new()),
        }
    }

    fn flush_warnings(&mut self) {
        for warning in self.manager.take_warnings() {
            web_sys::console::warn_1(&JsValue::from_str(&warning.to_string()));
        }
    }
}
