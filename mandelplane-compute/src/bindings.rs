//! JS-facing handle so a browser controller can drive the engine.

use crate::PlaneEngine;
use mandelplane_core::EngineConfig;
use wasm_bindgen::prelude::*;

fn init_runtime() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        _ = console_log::init_with_level(log::Level::Debug);
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmPlaneEngine {
    inner: PlaneEngine,
}

#[wasm_bindgen]
impl WasmPlaneEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<WasmPlaneEngine, JsValue> {
        init_runtime();
        let inner = PlaneEngine::new(width, height).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Construct with a JSON engine config; missing fields use defaults.
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(
        width: u32,
        height: u32,
        config_json: &str,
    ) -> Result<WasmPlaneEngine, JsValue> {
        init_runtime();
        let config = EngineConfig::from_json(config_json).map_err(to_js_error)?;
        let inner = PlaneEngine::with_config(width, height, config).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) {
        self.inner.zoom_in();
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) {
        self.inner.zoom_out();
    }

    #[wasm_bindgen(js_name = setCenter)]
    pub fn set_center(&mut self, pixel_x: i32, pixel_y: i32) {
        self.inner.set_center(pixel_x, pixel_y);
    }

    #[wasm_bindgen(js_name = setCursorSample)]
    pub fn set_cursor_sample(&mut self, pixel_x: i32, pixel_y: i32) {
        self.inner.set_cursor_sample(pixel_x, pixel_y);
    }

    #[wasm_bindgen(js_name = needsRecompute)]
    pub fn needs_recompute(&self) -> bool {
        self.inner.state().needs_recompute()
    }

    pub fn recompute(&mut self) {
        self.inner.recompute();
    }

    /// Row-major RGBA bytes, recomputing first if the view changed.
    pub fn rgba(&mut self) -> Vec<u8> {
        self.inner.render().to_rgba()
    }

    #[wasm_bindgen(js_name = describeView)]
    pub fn describe_view(&self) -> String {
        self.inner.describe_view()
    }

    /// `[real, imag]` for a pixel under the current window.
    #[wasm_bindgen(js_name = mapPixelToCoords)]
    pub fn map_pixel_to_coords(&self, pixel_x: i32, pixel_y: i32) -> Vec<f64> {
        let (real, imag) = self.inner.map_pixel_to_coords(pixel_x, pixel_y);
        vec![real, imag]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_drives_engine() {
        let mut handle = WasmPlaneEngine::new(8, 6).unwrap();
        assert!(handle.needs_recompute());

        let rgba = handle.rgba();
        assert_eq!(rgba.len(), 8 * 6 * 4);
        assert!(!handle.needs_recompute());

        handle.zoom_in();
        assert!(handle.needs_recompute());
        handle.recompute();
        assert!(!handle.needs_recompute());
    }

    #[test]
    fn handle_maps_center_pixel() {
        let handle = WasmPlaneEngine::new(800, 600).unwrap();
        let coords = handle.map_pixel_to_coords(400, 300);
        assert_eq!(coords.len(), 2);
        assert!(coords[0].abs() < 1e-12);
        assert!(coords[1].abs() < 1e-12);
    }

    #[test]
    fn handle_accepts_config_json() {
        let handle = WasmPlaneEngine::with_config_json(4, 4, r#"{ "max_iterations": 16 }"#);
        assert!(handle.is_ok());
    }
}
