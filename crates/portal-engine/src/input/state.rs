use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{ButtonState, InputEvent, Key, Modifiers, MouseButton};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an event to the current state and records deltas into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoid stuck keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                if let Some((px, py)) = self.pointer_pos {
                    frame.pointer_delta.0 += x - px;
                    frame.pointer_delta.1 += y - py;
                }
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::PointerButton { button, state } => match state {
                ButtonState::Pressed => {
                    self.buttons_down.insert(*button);
                }
                ButtonState::Released => {
                    self.buttons_down.remove(button);
                }
            },

            InputEvent::MouseWheel { lines } => frame.wheel_lines += lines,

            InputEvent::Key { key, state, .. } => match state {
                ButtonState::Pressed => {
                    self.keys_down.insert(*key);
                    frame.keys_pressed.insert(*key);
                }
                ButtonState::Released => {
                    self.keys_down.remove(key);
                }
            },
        }

        frame.events.push(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_delta_accumulates_after_first_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 10.0, y: 10.0 });
        assert_eq!(frame.pointer_delta, (0.0, 0.0));

        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 13.0, y: 8.0 });
        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 15.0, y: 9.0 });
        assert_eq!(frame.pointer_delta, (5.0, -1.0));

        frame.clear();
        assert_eq!(frame.pointer_delta, (0.0, 0.0));
        assert_eq!(state.pointer_pos, Some((15.0, 9.0)));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton { button: MouseButton::Left, state: ButtonState::Pressed },
        );
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::Shift, state: ButtonState::Pressed, repeat: false },
        );
        assert!(state.button_down(MouseButton::Left));
        assert!(state.key_down(Key::Shift));

        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.button_down(MouseButton::Left));
        assert!(!state.key_down(Key::Shift));
    }

    #[test]
    fn key_presses_and_wheel_land_in_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::ArrowUp, state: ButtonState::Pressed, repeat: false },
        );
        state.apply_event(&mut frame, InputEvent::MouseWheel { lines: 1.5 });
        state.apply_event(&mut frame, InputEvent::MouseWheel { lines: -0.5 });

        assert!(frame.pressed(Key::ArrowUp));
        assert_eq!(frame.wheel_lines, 1.0);
        assert_eq!(frame.events.len(), 3);
        assert_eq!(Key::Digit3.digit(), Some(3));
        assert_eq!(Key::C.digit(), None);
    }
}
