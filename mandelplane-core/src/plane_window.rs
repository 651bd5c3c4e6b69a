use crate::{EngineConfig, Viewport};
use serde::{Deserialize, Serialize};

/// Region of the complex plane currently mapped onto the viewport.
///
/// - `center`: center point (real, imaginary)
/// - `size`: (width, height) in plane units
/// - `zoom`: signed zoom step count, 0 at the initial view
///
/// The size is always derived from the zoom level, never accumulated, so any
/// sequence of zoom steps that returns to the same level restores the same
/// size bit for bit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneWindow {
    pub center: (f64, f64),
    pub size: (f64, f64),
    pub zoom: i32,
}

impl PlaneWindow {
    /// Initial window: centered on the origin at zoom 0.
    pub fn initial(config: &EngineConfig, viewport: &Viewport) -> Self {
        Self {
            center: (0.0, 0.0),
            size: size_at_zoom(config, viewport, 0),
            zoom: 0,
        }
    }

    /// Move to an absolute zoom level, recomputing the size from it.
    pub fn set_zoom(&mut self, zoom: i32, config: &EngineConfig, viewport: &Viewport) {
        self.zoom = zoom;
        self.size = size_at_zoom(config, viewport, zoom);
    }

    /// Plane distance covered by one pixel horizontally.
    pub fn pixel_step(&self, viewport: &Viewport) -> f64 {
        self.size.0 / viewport.width() as f64
    }
}

/// Window size for a zoom level:
/// (BASE_WIDTH · f^zoom, BASE_HEIGHT · aspect · f^zoom).
pub fn size_at_zoom(config: &EngineConfig, viewport: &Viewport, zoom: i32) -> (f64, f64) {
    let scale = config.zoom_factor.powi(zoom);
    (
        config.base_width * scale,
        config.base_height * viewport.aspect_ratio() * scale,
    )
}
