// Small value types shared by the mapper, the interpolator and the renderer.

/// The pixels we hand to minifb every frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // window width (pixels)
    pub height: usize,     // window height (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Fill every pixel with one colour.
    pub fn fill(&mut self, color: u32) {
        self.pixels.iter_mut().for_each(|p| *p = color);
    }
}

/// A pointer sample in window pixel space. Kept as f32 so the stroke
/// interpolator can blend between samples before truncation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPoint {
    pub x: f32,
    pub y: f32,
}

impl WindowPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Snap to the integer pixel the pointer is actually on (toward zero).
    pub fn truncated(self) -> Self {
        Self { x: self.x.trunc(), y: self.y.trunc() }
    }

    pub fn distance(self, other: Self) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A cell index inside the canvas buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasPoint {
    pub x: usize,
    pub y: usize,
}

/// Pack an RGB triplet as 0x00RRGGBB.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
