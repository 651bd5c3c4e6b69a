use crate::PlaneError;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the render target.
///
/// Fixed for the lifetime of an engine. The aspect ratio is height / width
/// and scales the plane height so pixels stay square.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: u32,
    height: u32,
    aspect_ratio: f64,
}

impl Viewport {
    /// Create a viewport. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, PlaneError> {
        if width == 0 || height == 0 {
            return Err(PlaneError::EmptyViewport { width, height });
        }
        Ok(Self {
            width,
            height,
            aspect_ratio: height as f64 / width as f64,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Number of pixels, and so the number of buffer entries.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major buffer index of pixel (x, y).
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }
}
