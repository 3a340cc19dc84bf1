// One error type for the whole pad.
// Every variant states *where* things went wrong; none of them is retried.
// Pointer motion outside the panels is not an error at all (it is ignored).
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the frame to the window failed

    #[error("Config error: {0}")]
    Config(String), // A start-time value is unusable (zero size, ink == background, ...)

    #[error("Seed image {path}: {reason}")]
    Seed { path: PathBuf, reason: String }, // Bootstrap drawing could not be used

    #[error("Export to {path} failed: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    }, // Writing the handoff file failed
}
