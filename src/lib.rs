// Doodle pad: draw small binary-ink images for an image-synthesis pipeline.
// Visual: a doodle panel you paint in, a preview panel beside it, and an
// output PNG on disk that always matches the doodle.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod layout;
pub mod preview;
pub mod render;
pub mod session;
pub mod stroke;
pub mod types;
