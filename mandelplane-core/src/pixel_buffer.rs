//! Per-pixel output of the engine.

use crate::Viewport;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Opaque RGBA bytes.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Pixel position in screen space (x right, y down).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPosition {
    pub x: u32,
    pub y: u32,
}

/// One buffer slot: where the pixel sits and what color it has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelEntry {
    pub position: PixelPosition,
    pub color: Rgb,
}

/// Row-major buffer with one entry per viewport pixel.
///
/// Freshly allocated entries are zeroed and carry no meaning until the
/// owning engine fills them.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    entries: Vec<PixelEntry>,
}

impl PixelBuffer {
    /// Allocate `width · height` entries for the viewport.
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            width: viewport.width(),
            height: viewport.height(),
            entries: vec![PixelEntry::default(); viewport.pixel_count()],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PixelEntry] {
        &self.entries
    }

    /// Mutable access for the engine filling the buffer.
    pub fn entries_mut(&mut self) -> &mut [PixelEntry] {
        &mut self.entries
    }

    /// Entry for pixel (x, y), or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<&PixelEntry> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.entries
            .get(x as usize + y as usize * self.width as usize)
    }

    /// Flatten to row-major RGBA bytes (`len() · 4`), alpha fixed at 255.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.entries
            .iter()
            .flat_map(|entry| entry.color.to_rgba())
            .collect()
    }
}
