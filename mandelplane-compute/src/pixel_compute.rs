use crate::{count_iterations, ColorizerKind};
use mandelplane_core::{
    pixel_to_plane, EngineConfig, PixelEntry, PixelPosition, PlaneWindow, Viewport,
};

/// Everything a single pixel depends on. Borrowed, so it can be shared
/// across any partitioning of the pixel loop.
#[derive(Clone, Copy, Debug)]
pub struct PixelContext<'a> {
    pub window: &'a PlaneWindow,
    pub viewport: &'a Viewport,
    pub config: &'a EngineConfig,
    pub colorizer: &'a ColorizerKind,
}

/// Compute the buffer entry for pixel (x, y).
///
/// Pure function of the pixel and the context: map to the plane, count
/// escape iterations, colorize.
pub fn compute_pixel(x: u32, y: u32, ctx: &PixelContext<'_>) -> PixelEntry {
    let (real, imag) = pixel_to_plane(x as i32, y as i32, ctx.window, ctx.viewport);
    let count = count_iterations(real, imag, ctx.config);
    PixelEntry {
        position: PixelPosition { x, y },
        color: ctx.colorizer.colorize(count, ctx.config.max_iterations),
    }
}

/// Fill one row of the buffer. `row` must hold exactly `viewport.width()` entries.
pub fn compute_row(y: u32, row: &mut [PixelEntry], ctx: &PixelContext<'_>) {
    for (x, entry) in row.iter_mut().enumerate() {
        *entry = compute_pixel(x as u32, y, ctx);
    }
}
