// Stroke interpolation: fill the gap between two pointer samples.
// Visual: a fast mouse sweep still leaves a continuous line instead of dots.

use clap::ValueEnum;

use crate::types::WindowPoint;

/// What the primary button does while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToolMode {
    /// Paint a line from the previous sample to the current one.
    Freehand,
    /// Paint only the exact current sample (no gap filling).
    Stamp,
}

/// Blend from `current` back toward `previous`.
///
/// Yields `steps` points; the first is `current`, the last stops one step
/// short of `previous` (which the caller already painted last time).
pub fn interpolate(
    previous: WindowPoint,
    current: WindowPoint,
    steps: usize,
) -> impl Iterator<Item = WindowPoint> {
    let steps = steps.max(1);
    let (dx, dy) = (previous.x - current.x, previous.y - current.y);
    // Offset from `current`: an axis with no motion stays exactly put.
    (0..steps).map(move |i| {
        let (i, n) = (i as f32, steps as f32);
        WindowPoint::new(current.x + dx * i / n, current.y + dy * i / n)
    })
}

/// Points to paint for one pointer move under `mode`.
pub fn stroke_points(
    mode: ToolMode,
    previous: WindowPoint,
    current: WindowPoint,
    steps: usize,
) -> impl Iterator<Item = WindowPoint> {
    // Stamp is a single step: i = 0 gives exactly `current`.
    let steps = match mode {
        ToolMode::Freehand => steps,
        ToolMode::Stamp => 1,
    };
    interpolate(previous, current, steps)
}
