use crate::{PlaneWindow, Viewport};

/// Convert a pixel coordinate to a point on the complex plane.
///
/// Screen y grows downward while the imaginary axis grows upward, so the
/// vertical axis is flipped: pixel (0, 0) maps to the top-left corner of the
/// window and pixel (width, height) to the bottom-right corner.
///
/// The evaluation order is fixed; reordering the terms changes the rounding
/// and so the rendered image.
///
/// Coordinates outside `[0, width) × [0, height)` are not rejected; they map
/// onto the extension of the window.
pub fn pixel_to_plane(
    pixel_x: i32,
    pixel_y: i32,
    window: &PlaneWindow,
    viewport: &Viewport,
) -> (f64, f64) {
    let x = pixel_x as f64;
    let y = pixel_y as f64;
    let width = viewport.width() as f64;
    let height = viewport.height() as f64;
    let (size_x, size_y) = window.size;
    let (center_x, center_y) = window.center;

    let real = (x / width) * size_x + (center_x - size_x / 2.0);
    let imag = ((height - y) / height) * size_y + (center_y - size_y / 2.0);

    (real, imag)
}
