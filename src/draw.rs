// Window wrapper.
// minifb only reports "is the button down right now", so we remember last
// frame's state and turn the differences into press/move/release events.
// Visual: the window you draw in; ESC or the close box quits.

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::session::{Button, InputEvent};
use crate::types::{FrameBuffer, WindowPoint};

/// Turns polled pointer state into discrete events. No window involved.
#[derive(Debug, Default)]
pub struct PointerTracker {
    primary_down: bool,
    secondary_down: bool,
    last_pos: Option<WindowPoint>,
}

impl PointerTracker {
    /// Compare this frame's sample with the last one.
    /// Without any known position nothing is emitted and nothing is latched,
    /// so a button already down shows up as a press once the pointer is seen.
    pub fn sample(
        &mut self,
        pos: Option<WindowPoint>,
        primary: bool,
        secondary: bool,
    ) -> Vec<InputEvent> {
        let Some(p) = pos.or(self.last_pos) else {
            return Vec::new();
        };

        let mut events = Vec::new();
        if primary && !self.primary_down {
            events.push(InputEvent::Press(Button::Primary, p));
        }
        if secondary && !self.secondary_down {
            events.push(InputEvent::Press(Button::Secondary, p));
        }
        if self.last_pos != Some(p) {
            events.push(InputEvent::Move(p));
        }
        if !primary && self.primary_down {
            events.push(InputEvent::Release(Button::Primary, p));
        }
        if !secondary && self.secondary_down {
            events.push(InputEvent::Release(Button::Secondary, p));
        }

        self.primary_down = primary;
        self.secondary_down = secondary;
        self.last_pos = Some(p);
        events
    }
}

pub struct Drawer {
    window: Window,
    tracker: PointerTracker,
}

impl Drawer {
    /// Create a window of the given size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // Pacing is the main loop's fixed sleep, not minifb's limiter.
        window.set_target_fps(0);
        Ok(Self { window, tracker: PointerTracker::default() })
    }

    /// Push the pixels for this frame to the screen (also pumps OS events).
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Everything that happened since the previous poll, in apply order.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            return vec![InputEvent::Close];
        }

        // Pass mode: positions outside the window come through and the mapper drops them.
        let pos = self
            .window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| WindowPoint::new(x, y));
        self.tracker.sample(
            pos,
            self.window.get_mouse_down(MouseButton::Left),
            self.window.get_mouse_down(MouseButton::Right),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Option<WindowPoint> {
        Some(WindowPoint::new(x, y))
    }

    #[test]
    fn press_drag_release_sequence() {
        let mut t = PointerTracker::default();
        let p = WindowPoint::new(20.0, 20.0);
        let q = WindowPoint::new(30.0, 20.0);

        assert_eq!(t.sample(Some(p), false, false), vec![InputEvent::Move(p)]);
        assert_eq!(t.sample(Some(p), true, false), vec![InputEvent::Press(Button::Primary, p)]);
        assert_eq!(t.sample(Some(q), true, false), vec![InputEvent::Move(q)]);
        assert!(t.sample(Some(q), true, false).is_empty());
        assert_eq!(t.sample(Some(q), false, false), vec![InputEvent::Release(Button::Primary, q)]);
    }

    #[test]
    fn press_and_move_in_one_sample_press_first() {
        let mut t = PointerTracker::default();
        t.sample(at(1.0, 1.0), false, false);
        let events = t.sample(at(5.0, 5.0), true, false);
        assert_eq!(
            events,
            vec![
                InputEvent::Press(Button::Primary, WindowPoint::new(5.0, 5.0)),
                InputEvent::Move(WindowPoint::new(5.0, 5.0)),
            ]
        );
    }

    #[test]
    fn secondary_button_edges() {
        let mut t = PointerTracker::default();
        let p = WindowPoint::new(3.0, 4.0);
        t.sample(Some(p), false, false);
        assert_eq!(t.sample(Some(p), false, true), vec![InputEvent::Press(Button::Secondary, p)]);
        assert_eq!(
            t.sample(Some(p), false, false),
            vec![InputEvent::Release(Button::Secondary, p)]
        );
    }

    #[test]
    fn button_down_before_first_position_still_presses() {
        let mut t = PointerTracker::default();
        assert!(t.sample(None, true, false).is_empty());
        assert!(t.sample(None, true, false).is_empty());
        let p = WindowPoint::new(40.0, 70.0);
        assert_eq!(
            t.sample(Some(p), true, false),
            vec![InputEvent::Press(Button::Primary, p), InputEvent::Move(p)]
        );
    }

    #[test]
    fn lost_position_reuses_last_known() {
        let mut t = PointerTracker::default();
        let p = WindowPoint::new(8.0, 9.0);
        t.sample(Some(p), true, false);
        assert_eq!(t.sample(None, false, false), vec![InputEvent::Release(Button::Primary, p)]);
    }
}
