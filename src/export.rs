// Persistence sink: the handoff file the image pipeline reads.
// Visual: nothing on screen; the output PNG on disk always matches the doodle.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::debug;

use crate::canvas::Canvas;
use crate::error::Error;
use crate::render::to_rgb;

pub struct Exporter {
    path: PathBuf,
    format: ImageFormat,
}

impl Exporter {
    /// Format follows the file extension; anything unrecognised is written as PNG.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ImageFormat::from_path(&path).unwrap_or(ImageFormat::Png);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with the canvas at native resolution, 3 channels.
    pub fn export(&self, canvas: &Canvas) -> Result<(), Error> {
        to_rgb(canvas)
            .save_with_format(&self.path, self.format)
            .map_err(|source| Error::Export { path: self.path.clone(), source })?;
        debug!(
            "Exported {}x{} drawing to {}",
            canvas.width(),
            canvas.height(),
            self.path.display()
        );
        Ok(())
    }
}
