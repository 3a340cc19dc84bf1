// Start-time configuration. Everything here is fixed once the window opens.
// Visual: the defaults give a 144x192 doodle shown 3x larger, with the
// reserved preview panel to its right.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Error;
use crate::stroke::ToolMode;

/// Light gray window fill behind both panels.
pub const WINDOW_BACKGROUND: u32 = 0x00_D2_D2_D2;
/// Black 1px frame around the doodle panel.
pub const BORDER_COLOR: u32 = 0x00_00_00_00;

/// Hand-draw small grayscale doodles for an image-synthesis pipeline.
///
/// Left mouse paints, right mouse clears. Every change is written to the
/// output file so the pipeline always sees the current drawing.
#[derive(Parser, Debug, Clone)]
#[command(name = "doodle-pad", version)]
pub struct Config {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 144)]
    pub width: usize,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 192)]
    pub height: usize,

    /// Integer upscale factor for the on-screen panels.
    #[arg(long, default_value_t = 3)]
    pub scale: usize,

    /// Gap around and between the panels, in window pixels.
    #[arg(long, default_value_t = 10)]
    pub padding: usize,

    /// Points generated per pointer move while drawing freehand.
    #[arg(long, default_value_t = 10)]
    pub interps: usize,

    /// Intensity of an empty cell.
    #[arg(long, default_value_t = 0)]
    pub background: u8,

    /// Intensity of an inked cell.
    #[arg(long, default_value_t = 255)]
    pub ink: u8,

    /// File rewritten after every change to the drawing.
    #[arg(short, long, default_value = "user_drawing.png", value_name = "FILE")]
    pub output: PathBuf,

    /// Sleep between frames, in milliseconds.
    #[arg(long, default_value_t = 10, value_name = "MS")]
    pub frame_ms: u64,

    /// Primary-button tool.
    #[arg(long, value_enum, default_value_t = ToolMode::Freehand)]
    pub tool: ToolMode,

    /// Start from an existing drawing instead of a blank canvas.
    #[arg(long, value_name = "IMAGE")]
    pub seed: Option<PathBuf>,

    /// Image shown in the preview panel, reloaded whenever it changes on disk.
    #[arg(long, value_name = "IMAGE")]
    pub preview: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 144,
            height: 192,
            scale: 3,
            padding: 10,
            interps: 10,
            background: 0,
            ink: 255,
            output: PathBuf::from("user_drawing.png"),
            frame_ms: 10,
            tool: ToolMode::Freehand,
            seed: None,
            preview: None,
        }
    }
}

impl Config {
    /// Reject values the pad cannot work with before any window exists.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.scale == 0 {
            return Err(Error::Config("scale must be at least 1".into()));
        }
        if self.interps == 0 {
            return Err(Error::Config("interps must be at least 1".into()));
        }
        if self.background == self.ink {
            return Err(Error::Config(format!(
                "ink and background are both {}; strokes would be invisible",
                self.ink
            )));
        }
        if self.checked_window_size().is_none() {
            return Err(Error::Config(format!(
                "{}x{} at scale {} with padding {} does not fit in a window",
                self.width, self.height, self.scale, self.padding
            )));
        }
        Ok(())
    }

    /// Window and canvas sizes without overflow; pixel sizes must also fit
    /// the u32 dimensions the image buffers use.
    fn checked_window_size(&self) -> Option<(usize, usize)> {
        let cells = self.width.checked_mul(self.height)?;
        let pw = self.width.checked_mul(self.scale)?;
        let ph = self.height.checked_mul(self.scale)?;
        let pad3 = self.padding.checked_mul(3)?;
        let ww = pw.checked_mul(2)?.checked_add(pad3)?;
        let wh = ph.checked_add(self.padding.checked_mul(2)?)?;
        pw.checked_mul(ph)?;
        ww.checked_mul(wh)?;
        let fits = |v: usize| u32::try_from(v).is_ok();
        (fits(ww) && fits(wh) && fits(cells)).then_some((ww, wh))
    }

    /// Size of one panel on screen.
    pub fn panel_size(&self) -> (usize, usize) {
        (self.width * self.scale, self.height * self.scale)
    }

    /// Top-left of the doodle panel in window space.
    pub fn doodle_origin(&self) -> (usize, usize) {
        (self.padding, self.padding)
    }

    /// Top-left of the preview panel: one padding right of the doodle panel.
    pub fn preview_origin(&self) -> (usize, usize) {
        let (pw, _) = self.panel_size();
        (self.padding * 2 + pw, self.padding)
    }

    /// Window large enough for both panels plus the padding around them.
    pub fn window_size(&self) -> (usize, usize) {
        let (pw, ph) = self.panel_size();
        (pw * 2 + self.padding * 3, ph + self.padding * 2)
    }
}
