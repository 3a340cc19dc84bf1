// The drawing itself: one byte per cell, either background or ink.
// Visual: this is exactly what ends up in the exported file (before the
// grey -> RGB replication).

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;
use log::{info, trace};

use crate::error::Error;

pub struct Canvas {
    width: usize,
    height: usize,
    background: u8,
    ink: u8,
    cells: Vec<u8>, // row-major, len = width * height
    dirty: bool,
}

impl Canvas {
    /// A blank canvas. Starts dirty so the first frame renders and exports it.
    pub fn new(width: usize, height: usize, background: u8, ink: u8) -> Self {
        Self {
            width,
            height,
            background,
            ink,
            cells: vec![background; width * height],
            dirty: true,
        }
    }

    /// Bootstrap from an existing drawing on disk.
    /// Fails before the window opens if the file cannot be used.
    pub fn from_seed(
        path: &Path,
        width: usize,
        height: usize,
        background: u8,
        ink: u8,
    ) -> Result<Self, Error> {
        let seed_err = |reason: String| Error::Seed { path: path.to_path_buf(), reason };
        let img = image::open(path).map_err(|e| seed_err(e.to_string()))?;
        let canvas = Self::from_image(&img, width, height, background, ink).map_err(seed_err)?;
        info!("Seeded {}x{} canvas from {}", width, height, path.display());
        Ok(canvas)
    }

    /// Resize `img` to the canvas size, keep its first channel and snap every
    /// value to whichever of background/ink it is closer to.
    pub fn from_image(
        img: &DynamicImage,
        width: usize,
        height: usize,
        background: u8,
        ink: u8,
    ) -> Result<Self, String> {
        if img.width() == 0 || img.height() == 0 {
            return Err("image has no pixels".into());
        }
        let color = img.color();
        if color.has_alpha() || !matches!(color.channel_count(), 1 | 3) {
            return Err(format!("expected a 1- or 3-channel image without alpha, got {color:?}"));
        }

        let resized = img.resize_exact(width as u32, height as u32, FilterType::Triangle).to_rgb8();

        let mut canvas = Self::new(width, height, background, ink);
        for (dst, px) in canvas.cells.iter_mut().zip(resized.pixels()) {
            let v = px[0];
            *dst = if v.abs_diff(ink) <= v.abs_diff(background) { ink } else { background };
        }
        Ok(canvas)
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn ink(&self) -> u8 { self.ink }
    pub fn background(&self) -> u8 { self.background }

    /// Row-major cell values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Read one cell; `None` outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Ink one cell. Out-of-bounds is silently ignored (pointer drifted off).
    pub fn set_ink(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        trace!("ink ({x}, {y})");
        self.cells[y * self.width + x] = self.ink;
        self.dirty = true;
    }

    /// Reset every cell to background.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = self.background);
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty_flag(&mut self) {
        self.dirty = false;
    }
}
