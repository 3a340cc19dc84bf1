// Panel geometry and the window -> canvas coordinate mapper.
// Visual: clicking on either the doodle panel or the preview panel paints the
// same cell of the drawing; clicks in the padding do nothing.

use crate::config::Config;
use crate::types::{CanvasPoint, WindowPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Doodle,  // the drawing itself, upscaled
    Preview, // reserved for the generated counterpart
}

/// A rectangle in window space showing the canvas at `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub kind: PanelKind,
    pub x: usize,
    pub y: usize,
    pub scale: usize,
}

/// The fixed set of panels. Order is lookup precedence.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    panels: Vec<Panel>,
    canvas_w: usize,
    canvas_h: usize,
}

impl PanelLayout {
    /// Preview is checked before doodle, mirroring how the pad has always
    /// resolved a point that could belong to either.
    pub fn from_config(cfg: &Config) -> Self {
        let (px, py) = cfg.preview_origin();
        let (dx, dy) = cfg.doodle_origin();
        Self::new(
            vec![
                Panel { kind: PanelKind::Preview, x: px, y: py, scale: cfg.scale },
                Panel { kind: PanelKind::Doodle, x: dx, y: dy, scale: cfg.scale },
            ],
            cfg.width,
            cfg.height,
        )
    }

    pub fn new(panels: Vec<Panel>, canvas_w: usize, canvas_h: usize) -> Self {
        Self { panels, canvas_w, canvas_h }
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// Map a window pixel to a canvas cell, or `None` if no panel holds it.
    pub fn map_to_canvas(&self, p: WindowPoint) -> Option<CanvasPoint> {
        self.panels.iter().find_map(|panel| self.map_in(panel, p))
    }

    fn map_in(&self, panel: &Panel, p: WindowPoint) -> Option<CanvasPoint> {
        let s = panel.scale as f32;
        let x = (p.x - panel.x as f32) / s;
        let y = (p.y - panel.y as f32) / s;
        let inside = x >= 0.0 && y >= 0.0 && x < self.canvas_w as f32 && y < self.canvas_h as f32;
        // Non-negative here, so `as usize` is floor.
        inside.then(|| CanvasPoint { x: x as usize, y: y as usize })
    }
}
