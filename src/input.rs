use raylib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    Click(Vector2),
    TouchStart(Vector2),
    TouchEnd(Vector2),
}

/// Turns raylib's per-frame input state into discrete events.
#[derive(Debug, Default)]
pub struct InputPoller {
    touching: bool,
    last_touch: Option<Vector2>,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll(&mut self, rl: &RaylibHandle) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for (code, key) in [
            (KeyboardKey::KEY_LEFT, Key::Left),
            (KeyboardKey::KEY_RIGHT, Key::Right),
            (KeyboardKey::KEY_SPACE, Key::Space),
        ] {
            if rl.is_key_pressed(code) {
                events.push(InputEvent::KeyDown(key));
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            events.push(InputEvent::Click(rl.get_mouse_position()));
        }

        let touching = rl.get_touch_point_count() > 0;
        let position = if touching { Some(rl.get_touch_position(0)) } else { None };
        events.extend(self.touch_transition(position));

        events
    }

    /// Compares the primary touch point with the previous frame. raylib only
    /// reports where fingers are, so the end position is the last one seen.
    fn touch_transition(&mut self, position: Option<Vector2>) -> Option<InputEvent> {
        let event = match (self.touching, position) {
            (false, Some(p)) => Some(InputEvent::TouchStart(p)),
            (true, None) => self.last_touch.map(InputEvent::TouchEnd),
            _ => None,
        };
        self.touching = position.is_some();
        if position.is_some() {
            self.last_touch = position;
        }
        event
    }
}
