//! Plane engine: view window, escape-time render and cached pixel buffer.

use crate::pixel_compute::{compute_row, PixelContext};
use crate::{count_iterations, ColorizerKind, ViewSummary};
use mandelplane_core::{
    is_precision_exhausted, pixel_to_plane, EngineConfig, PixelBuffer, PlaneError, PlaneWindow,
    Rgb, Viewport,
};

/// Whether the pixel buffer reflects the current window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Buffer is stale and must be recomputed before display.
    Calculating,
    /// Buffer matches the current window.
    Displaying,
}

impl EngineState {
    pub fn needs_recompute(self) -> bool {
        matches!(self, Self::Calculating)
    }

    /// Any view change makes the buffer stale.
    fn invalidate(self) -> Self {
        Self::Calculating
    }

    /// Only a pending recompute can complete.
    fn complete(self) -> Self {
        match self {
            Self::Calculating => Self::Displaying,
            Self::Displaying => Self::Displaying,
        }
    }
}

/// Owns the view over the complex plane and the rendered pixel buffer.
///
/// The buffer is only rebuilt by `recompute()` (or `render()`), and only when
/// the state is `Calculating`. `buffer()` never recomputes; callers that want
/// lazy behavior use `render()`.
#[derive(Debug)]
pub struct PlaneEngine {
    viewport: Viewport,
    config: EngineConfig,
    window: PlaneWindow,
    cursor_sample: (f64, f64),
    state: EngineState,
    buffer: PixelBuffer,
    colorizer: ColorizerKind,
    precision_warned: bool,
}

impl PlaneEngine {
    /// Create an engine for a `width × height` viewport with the default config.
    pub fn new(width: u32, height: u32) -> Result<Self, PlaneError> {
        Self::with_config(width, height, EngineConfig::default())
    }

    /// Create an engine with a custom config. The config is validated.
    pub fn with_config(width: u32, height: u32, config: EngineConfig) -> Result<Self, PlaneError> {
        config.validate()?;
        let viewport = Viewport::new(width, height)?;
        let window = PlaneWindow::initial(&config, &viewport);

        log::debug!(
            "PlaneEngine created: {}x{} pixels, plane {}x{}",
            width,
            height,
            window.size.0,
            window.size.1
        );

        Ok(Self {
            viewport,
            config,
            window,
            cursor_sample: (0.0, 0.0),
            state: EngineState::Calculating,
            buffer: PixelBuffer::new(&viewport),
            colorizer: ColorizerKind::default(),
            precision_warned: false,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn window(&self) -> &PlaneWindow {
        &self.window
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn zoom(&self) -> i32 {
        self.window.zoom
    }

    pub fn cursor_sample(&self) -> (f64, f64) {
        self.cursor_sample
    }

    pub fn colorizer(&self) -> &ColorizerKind {
        &self.colorizer
    }

    /// Swap the colorizer. Colors change, so the buffer becomes stale.
    pub fn set_colorizer(&mut self, colorizer: ColorizerKind) {
        self.colorizer = colorizer;
        self.state = self.state.invalidate();
    }

    /// Map a pixel to plane coordinates using the current window.
    pub fn map_pixel_to_coords(&self, pixel_x: i32, pixel_y: i32) -> (f64, f64) {
        pixel_to_plane(pixel_x, pixel_y, &self.window, &self.viewport)
    }

    /// Escape-time count for a plane point under this engine's config.
    pub fn count_iterations(&self, real: f64, imag: f64) -> u32 {
        count_iterations(real, imag, &self.config)
    }

    /// Color for an iteration count under the active colorizer.
    pub fn iterations_to_color(&self, count: u32) -> Rgb {
        self.colorizer.colorize(count, self.config.max_iterations)
    }

    /// Rebuild the whole buffer if it is stale. No-op otherwise.
    pub fn recompute(&mut self) {
        if !self.state.needs_recompute() {
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        let started = std::time::Instant::now();

        let ctx = PixelContext {
            window: &self.window,
            viewport: &self.viewport,
            config: &self.config,
            colorizer: &self.colorizer,
        };
        let width = self.viewport.width() as usize;
        for (y, row) in self.buffer.entries_mut().chunks_mut(width).enumerate() {
            compute_row(y as u32, row, &ctx);
        }

        self.state = self.state.complete();

        #[cfg(not(target_arch = "wasm32"))]
        log::debug!(
            "Recomputed {} pixels at zoom {} in {:.1}ms",
            self.buffer.len(),
            self.window.zoom,
            started.elapsed().as_secs_f64() * 1000.0
        );
        #[cfg(target_arch = "wasm32")]
        log::debug!(
            "Recomputed {} pixels at zoom {}",
            self.buffer.len(),
            self.window.zoom
        );
    }

    /// Current buffer, as-is. Stale while `state()` is `Calculating`.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Recompute if needed, then return the buffer.
    pub fn render(&mut self) -> &PixelBuffer {
        self.recompute();
        &self.buffer
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.window.zoom + 1);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.window.zoom - 1);
    }

    fn set_zoom(&mut self, zoom: i32) {
        self.window.set_zoom(zoom, &self.config, &self.viewport);
        self.state = self.state.invalidate();
        log::trace!(
            "Zoom {} -> plane {}x{}",
            zoom,
            self.window.size.0,
            self.window.size.1
        );
        self.check_precision();
    }

    /// Recenter on the plane point under pixel (x, y), mapped against the
    /// window as it was before the move. Size is unchanged.
    pub fn set_center(&mut self, pixel_x: i32, pixel_y: i32) {
        self.window.center = self.map_pixel_to_coords(pixel_x, pixel_y);
        self.state = self.state.invalidate();
        log::trace!(
            "Center set to ({}, {}) from pixel ({}, {})",
            self.window.center.0,
            self.window.center.1,
            pixel_x,
            pixel_y
        );
        self.check_precision();
    }

    /// Record the plane point under the cursor. Does not touch the buffer.
    pub fn set_cursor_sample(&mut self, pixel_x: i32, pixel_y: i32) {
        self.cursor_sample = self.map_pixel_to_coords(pixel_x, pixel_y);
    }

    /// True once f64 can no longer separate adjacent pixels in this window.
    pub fn precision_exhausted(&self) -> bool {
        is_precision_exhausted(&self.window, &self.viewport)
    }

    /// Snapshot of the view for an overlay.
    pub fn view_summary(&self) -> ViewSummary {
        ViewSummary {
            center: self.window.center,
            zoom: self.window.zoom,
            cursor: self.cursor_sample,
            precision_exhausted: self.precision_exhausted(),
        }
    }

    /// Overlay text: `Center: (x, y) | Zoom: n | Mouse: (x, y)`.
    pub fn describe_view(&self) -> String {
        self.view_summary().to_string()
    }

    fn check_precision(&mut self) {
        let exhausted = self.precision_exhausted();
        if exhausted && !self.precision_warned {
            log::warn!(
                "f64 precision exhausted at zoom {}; render will show blocky artifacts",
                self.window.zoom
            );
        }
        self.precision_warned = exhausted;
    }
}
