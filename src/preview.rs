// Preview panel source. An outside producer writes an image file; we pick up
// each new version and show it next to the doodle.
// Visual: the right-hand panel swaps to the new picture within a frame of the
// file changing; broken files leave the last good picture up.

use std::path::PathBuf;
use std::time::SystemTime;

use image::RgbImage;
use image::imageops::FilterType;
use log::{info, warn};

/// Identity of one version of the file. Length is included because a
/// rewrite can land within the same coarse mtime tick.
type Stamp = (SystemTime, u64);

pub struct Preview {
    path: Option<PathBuf>,
    size: (u32, u32),          // preview panel size on screen
    last_seen: Option<Stamp>,
    missing_reported: bool,
    image: Option<RgbImage>,
}

impl Preview {
    pub fn new(path: Option<PathBuf>, panel_w: usize, panel_h: usize) -> Self {
        Self {
            path,
            size: (panel_w as u32, panel_h as u32),
            last_seen: None,
            missing_reported: false,
            image: None,
        }
    }

    pub fn image(&self) -> Option<&RgbImage> {
        self.image.as_ref()
    }

    /// Reload the file if it changed since the last look. Returns true on reload.
    pub fn refresh(&mut self) -> bool {
        let Some(path) = &self.path else { return false };
        let stamp = match std::fs::metadata(path).and_then(|m| Ok((m.modified()?, m.len()))) {
            Ok(stamp) => stamp,
            Err(e) => {
                // Warn once per disappearance, not every frame.
                if !self.missing_reported {
                    warn!("Preview {} not available: {e}", path.display());
                    self.missing_reported = true;
                }
                return false;
            }
        };
        self.missing_reported = false;
        if self.last_seen == Some(stamp) {
            return false;
        }
        self.last_seen = Some(stamp);

        match image::open(path) {
            Ok(img) => {
                let (w, h) = self.size;
                self.image = Some(img.resize_exact(w, h, FilterType::Triangle).to_rgb8());
                info!("Preview reloaded from {}", path.display());
                true
            }
            Err(e) => {
                warn!("Preview {} unreadable, keeping previous: {e}", path.display());
                false
            }
        }
    }
}
