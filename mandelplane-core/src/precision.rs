//! Precision diagnostics for f64 plane coordinates.
//!
//! The window shrinks geometrically with each zoom step while coordinates
//! stay plain f64. Once adjacent pixels map to coordinates closer together
//! than the mantissa can resolve, renders degrade into blocks. These helpers
//! detect that boundary; nothing here changes how pixels are computed.

use crate::{plane_window::size_at_zoom, EngineConfig, PlaneWindow, Viewport};

/// Mantissa bits available in an f64.
const F64_MANTISSA_BITS: u32 = f64::MANTISSA_DIGITS;

/// Bits reserved for rounding in the pixel mapping and the iteration.
const SAFETY_BITS: u32 = 4;

/// Upper bound on zoom steps examined by `max_supported_zoom`.
const MAX_ZOOM_SEARCH: i32 = 4096;

/// Mantissa bits needed to tell adjacent pixels apart in this window.
///
/// Computed as ceil(log2(M / step)) where M is the largest coordinate
/// magnitude inside the window and step the plane distance between pixels.
/// Returns `u32::MAX` when the step has underflowed to zero.
pub fn required_mantissa_bits(window: &PlaneWindow, viewport: &Viewport) -> u32 {
    let step_x = window.size.0 / viewport.width() as f64;
    let step_y = window.size.1 / viewport.height() as f64;
    let step = step_x.min(step_y);

    let mx = window.center.0.abs() + window.size.0 / 2.0;
    let my = window.center.1.abs() + window.size.1 / 2.0;
    let magnitude = mx.max(my);

    let ratio = magnitude / step;
    if !ratio.is_finite() || step <= 0.0 {
        return u32::MAX;
    }

    ratio.log2().ceil().max(0.0) as u32
}

/// True once f64 can no longer resolve adjacent pixels in this window.
pub fn is_precision_exhausted(window: &PlaneWindow, viewport: &Viewport) -> bool {
    required_mantissa_bits(window, viewport) > F64_MANTISSA_BITS - SAFETY_BITS
}

/// Deepest zoom level around `center` that still renders faithfully.
///
/// At the origin the ratio stays constant until the window underflows, so
/// the search is capped at `MAX_ZOOM_SEARCH` steps.
pub fn max_supported_zoom(
    config: &EngineConfig,
    viewport: &Viewport,
    center: (f64, f64),
) -> i32 {
    let mut zoom = 0;
    while zoom < MAX_ZOOM_SEARCH {
        let next = PlaneWindow {
            center,
            size: size_at_zoom(config, viewport, zoom + 1),
            zoom: zoom + 1,
        };
        if is_precision_exhausted(&next, viewport) {
            break;
        }
        zoom += 1;
    }
    zoom
}
