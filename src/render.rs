// Render pipeline: canvas -> RGB display frame -> window pixels.
// Visual effects provided here:
// 1) The grey drawing replicated into RGB and scaled up into the doodle panel.
// 2) Whatever the preview source holds, in the preview panel (and only there).
// 3) A thin black frame around the doodle panel.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::canvas::Canvas;
use crate::config::{BORDER_COLOR, Config, WINDOW_BACKGROUND};
use crate::types::{FrameBuffer, pack_rgb};

/// Replicate the single intensity channel into R, G and B at native size.
/// Shared by the on-screen path and the exporter.
pub fn to_rgb(canvas: &Canvas) -> RgbImage {
    let (w, h) = (canvas.width() as u32, canvas.height() as u32);
    let cells = canvas.cells();
    RgbImage::from_fn(w, h, |x, y| {
        let v = cells[y as usize * canvas.width() + x as usize];
        Rgb([v, v, v])
    })
}

pub struct Renderer {
    scale: u32,
    doodle_origin: (usize, usize),
    preview_origin: (usize, usize),
    display: RgbImage,   // upscaled doodle, rebuilt only when the canvas is dirty
    screen: FrameBuffer, // what the window shows this frame
}

impl Renderer {
    pub fn new(cfg: &Config) -> Self {
        let (ww, wh) = cfg.window_size();
        let (pw, ph) = cfg.panel_size();
        Self {
            scale: cfg.scale as u32,
            doodle_origin: cfg.doodle_origin(),
            preview_origin: cfg.preview_origin(),
            display: RgbImage::new(pw as u32, ph as u32),
            screen: FrameBuffer::new(ww, wh),
        }
    }

    /// Rebuild the display frame from the canvas.
    /// Visual: the doodle panel shows the new stroke from the next compose on.
    pub fn render(&mut self, canvas: &Canvas) {
        let rgb = to_rgb(canvas);
        let (w, h) = rgb.dimensions();
        self.display = imageops::resize(&rgb, w * self.scale, h * self.scale, FilterType::Nearest);
    }

    pub fn display_frame(&self) -> &RgbImage {
        &self.display
    }

    /// Assemble the whole window from the current display frame.
    /// Runs every frame, dirty or not.
    pub fn compose(&mut self, preview: Option<&RgbImage>) -> &FrameBuffer {
        self.screen.fill(WINDOW_BACKGROUND);

        let (dx, dy) = self.doodle_origin;
        let panel = self.display.dimensions();
        blit(&mut self.screen, &self.display, dx, dy, panel);

        if let Some(img) = preview {
            let (px, py) = self.preview_origin;
            // Never spill past the panel, whatever size the producer gave us.
            blit(&mut self.screen, img, px, py, panel);
        }

        let (w, h) = self.display.dimensions();
        draw_rect(&mut self.screen, dx as i32, dy as i32, w as i32, h as i32, BORDER_COLOR);
        &self.screen
    }
}

/// Copy at most `clip` of `img` into the framebuffer with its top-left at
/// (ox, oy), also clipped to the framebuffer.
fn blit(fb: &mut FrameBuffer, img: &RgbImage, ox: usize, oy: usize, clip: (u32, u32)) {
    let w = img.width().min(clip.0) as usize;
    let h = img.height().min(clip.1) as usize;
    for y in 0..h.min(fb.height.saturating_sub(oy)) {
        for x in 0..w.min(fb.width.saturating_sub(ox)) {
            let px = img.get_pixel(x as u32, y as u32);
            fb.pixels[(oy + y) * fb.width + ox + x] = pack_rgb(px[0], px[1], px[2]);
        }
    }
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Bresenham line from (x0,y0) to (x1,y1), both ends included.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// 1px outline drawn on the rectangle's own edge pixels.
fn draw_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    if w <= 0 || h <= 0 {
        return;
    }
    let (r, b) = (x + w - 1, y + h - 1);
    draw_line(fb, x, y, r, y, color);
    draw_line(fb, x, b, r, b, color);
    draw_line(fb, x, y, x, b, color);
    draw_line(fb, r, y, r, b, color);
}
