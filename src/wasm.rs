use wasm_bindgen::prelude::*;

use hue_wheel_ui::{CanvasSurface, Event, init_logging};

use crate::config::WheelConfig;
use crate::picker::ColorWheel;
use crate::storage::LocalStorageStore;

/// A color wheel mounted on a `<canvas>` element, for use from JavaScript.
///
/// Picked colors are persisted to `localStorage` and returned from `click`.
#[wasm_bindgen]
pub struct WebColorWheel {
    wheel: ColorWheel<String>,
}

#[wasm_bindgen]
impl WebColorWheel {
    /// Paint the wheel onto the canvas with the given element id.
    ///
    /// `config_json` is an optional `WheelConfig` in its JSON form; missing
    /// fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<WebColorWheel, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => WheelConfig::from_json(&json).map_err(to_js)?,
            None => WheelConfig::default(),
        };
        init_logging(config.log_level.to_level_filter());

        let store = LocalStorageStore::open().map_err(to_js)?;
        let surface = CanvasSurface::from_element_id(canvas_id).map_err(to_js)?;
        let mut wheel = ColorWheel::new(config, Box::new(store))
            .map_err(to_js)?
            .on_pick(|color| color.to_string());
        wheel.initialize(Box::new(surface)).map_err(to_js)?;

        Ok(Self { wheel })
    }

    /// Handle a click at viewport coordinates (`clientX`, `clientY`).
    ///
    /// Returns the picked `rgb(r, g, b)` string, or `undefined` if the click
    /// missed the wheel.
    pub fn click(&mut self, client_x: f32, client_y: f32) -> Option<String> {
        self.wheel
            .handle_event(&Event::left_click(client_x, client_y))
            .into_message()
    }

    /// The currently displayed color, restored from `localStorage` on load.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> Option<String> {
        self.wheel.display_value().map(str::to_string)
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
