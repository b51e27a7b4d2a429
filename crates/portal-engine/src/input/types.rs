/// Keys the scene reacts to. Anything else maps to `Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,

    C,
    R,

    Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8,

    F1,

    /// Platform key code not represented above.
    Unknown(u32),
}

impl Key {
    /// Index of a digit key, `Digit1` -> 1.
    pub fn digit(self) -> Option<u8> {
        Some(match self {
            Key::Digit1 => 1,
            Key::Digit2 => 2,
            Key::Digit3 => 3,
            Key::Digit4 => 4,
            Key::Digit5 => 5,
            Key::Digit6 => 6,
            Key::Digit7 => 7,
            Key::Digit8 => 8,
            _ => return None,
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Press/release state shared by keys and buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Platform-agnostic input event. Positions are logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    Focused(bool),
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    PointerButton { button: MouseButton, state: ButtonState },
    /// Wheel motion in lines; positive scrolls away from the user.
    MouseWheel { lines: f32 },
    Key { key: Key, state: ButtonState, repeat: bool },
}
