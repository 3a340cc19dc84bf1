// The drawing session: pointer state machine plus the per-frame flush.
// Knows nothing about minifb; the window feeds it `InputEvent`s.
//
// Idle   --primary press-->  Stroke (paints the press point)
// Stroke --move-->           Stroke (paints the gap from the trail)
// Stroke --primary release-> Idle
// any    --secondary press-> same state, canvas cleared
// any    --close-->          Terminate

use log::{debug, info};

use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::Error;
use crate::export::Exporter;
use crate::layout::PanelLayout;
use crate::preview::Preview;
use crate::render::Renderer;
use crate::stroke::{ToolMode, stroke_points};
use crate::types::{FrameBuffer, WindowPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,   // ink
    Secondary, // clear
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press(Button, WindowPoint),
    Move(WindowPoint),
    Release(Button, WindowPoint),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    Idle,
    /// Primary held; `trail` is the last raw pointer sample.
    Stroke { trail: WindowPoint },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

pub struct Session {
    canvas: Canvas,
    layout: PanelLayout,
    tool: ToolMode,
    steps: usize,
    state: StrokeState,
    renderer: Renderer,
    exporter: Exporter,
    preview: Preview,
}

impl Session {
    /// Build every component from the config. Seed problems surface here,
    /// before any window exists.
    pub fn new(cfg: &Config) -> Result<Self, Error> {
        cfg.validate()?;
        let canvas = match &cfg.seed {
            Some(path) => Canvas::from_seed(path, cfg.width, cfg.height, cfg.background, cfg.ink)?,
            None => Canvas::new(cfg.width, cfg.height, cfg.background, cfg.ink),
        };
        let (pw, ph) = cfg.panel_size();
        Ok(Self {
            canvas,
            layout: PanelLayout::from_config(cfg),
            tool: cfg.tool,
            steps: cfg.interps,
            state: StrokeState::Idle,
            renderer: Renderer::new(cfg),
            exporter: Exporter::new(cfg.output.clone()),
            preview: Preview::new(cfg.preview.clone(), pw, ph),
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    /// Apply one input event to the canvas.
    pub fn handle(&mut self, event: InputEvent) -> Flow {
        match (event, self.state) {
            (InputEvent::Close, _) => return Flow::Terminate,

            (InputEvent::Press(Button::Primary, p), _) => {
                // Even a press in the padding starts a stroke; it just paints nothing yet.
                self.paint(p);
                self.state = StrokeState::Stroke { trail: p };
                debug!("Stroke begins at ({}, {})", p.x, p.y);
            }

            (InputEvent::Press(Button::Secondary, _), _) => {
                self.canvas.clear();
                info!("Canvas cleared");
            }

            (InputEvent::Move(p), StrokeState::Stroke { trail }) => {
                for q in stroke_points(self.tool, trail, p, self.steps) {
                    self.paint(q);
                }
                self.state = StrokeState::Stroke { trail: p };
            }

            (InputEvent::Release(Button::Primary, _), StrokeState::Stroke { .. }) => {
                self.state = StrokeState::Idle;
                debug!("Stroke ends");
            }

            // Hover moves, stray releases.
            _ => {}
        }
        Flow::Continue
    }

    fn paint(&mut self, p: WindowPoint) {
        if let Some(c) = self.layout.map_to_canvas(p.truncated()) {
            self.canvas.set_ink(c.x, c.y);
        }
    }

    /// End-of-frame pass: refresh the preview, then render + export if the
    /// canvas changed. Returns whether an export happened.
    pub fn end_frame(&mut self) -> Result<bool, Error> {
        self.preview.refresh();
        if !self.canvas.is_dirty() {
            return Ok(false);
        }
        self.renderer.render(&self.canvas);
        self.exporter.export(&self.canvas)?;
        self.canvas.clear_dirty_flag();
        Ok(true)
    }

    /// One loop iteration: apply every queued event in order, then flush.
    /// The flush also runs on the closing frame so the last stroke is saved.
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent>) -> Result<Flow, Error> {
        let mut flow = Flow::Continue;
        for event in events {
            flow = self.handle(event);
            if flow == Flow::Terminate {
                break;
            }
        }
        self.end_frame()?;
        Ok(flow)
    }

    /// The window pixels for this frame, from the current display frame.
    pub fn screen(&mut self) -> &FrameBuffer {
        self.renderer.compose(self.preview.image())
    }
}
