//! Keyboard-driven debug panel.

use portal_engine::input::{ButtonState, InputEvent, InputFrame, Key};
use portal_engine::paint::Color;
use portal_engine::scene::DebugParams;

/// Fireflies size step for the arrow keys; Shift switches to `FINE_STEP`.
pub const SIZE_STEP: f32 = 10.0;
pub const FINE_STEP: f32 = 1.0;

/// Portal inner color presets, keys 1-4.
pub const START_PRESETS: [Color; 4] = [
    Color::from_u32(0x000000),
    Color::from_u32(0x1b0630),
    Color::from_u32(0x002b36),
    Color::from_u32(0x301000),
];

/// Portal rim color presets, keys 5-8.
pub const END_PRESETS: [Color; 4] = [
    Color::from_u32(0xffffff),
    Color::from_u32(0xd97cff),
    Color::from_u32(0x7cf4ff),
    Color::from_u32(0xffb347),
];

/// Background presets cycled with C.
pub const CLEAR_PRESETS: [Color; 3] = [
    Color::from_u32(0x110e0e),
    Color::from_u32(0x0b1020),
    Color::from_u32(0x201a12),
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PanelAction {
    Continue,
    Exit,
}

pub struct DebugPanel {
    params: DebugParams,
    clear_index: usize,
}

impl DebugPanel {
    pub fn new(params: DebugParams) -> Self {
        Self {
            params,
            clear_index: 0,
        }
    }

    pub fn params(&self) -> &DebugParams {
        &self.params
    }

    /// Applies this frame's key presses in arrival order.
    pub fn handle_input(&mut self, frame: &InputFrame, shift: bool) -> PanelAction {
        for ev in &frame.events {
            let InputEvent::Key { key, state: ButtonState::Pressed, repeat } = *ev else {
                continue;
            };
            if self.press(key, repeat, shift) == PanelAction::Exit {
                return PanelAction::Exit;
            }
        }
        PanelAction::Continue
    }

    fn press(&mut self, key: Key, repeat: bool, shift: bool) -> PanelAction {
        let step = if shift { FINE_STEP } else { SIZE_STEP };

        match key {
            Key::Escape => return PanelAction::Exit,

            Key::ArrowUp => {
                let size = self.params.nudge_fireflies_size(step);
                log::info!("fireflies size = {size}");
            }
            Key::ArrowDown => {
                let size = self.params.nudge_fireflies_size(-step);
                log::info!("fireflies size = {size}");
            }

            // Everything below ignores auto-repeat.
            _ if repeat => {}

            Key::C => {
                self.clear_index = (self.clear_index + 1) % CLEAR_PRESETS.len();
                let color = CLEAR_PRESETS[self.clear_index];
                self.params.set_clear_color(color);
                log::info!("clear color = {color}");
            }

            Key::F1 => {
                let p = &self.params;
                log::info!(
                    "portal start {} | portal end {} | clear {} | fireflies size {}",
                    p.portal_color_start(),
                    p.portal_color_end(),
                    p.clear_color(),
                    p.fireflies_size()
                );
            }

            other => match other.digit() {
                Some(d @ 1..=4) => {
                    let color = START_PRESETS[usize::from(d - 1)];
                    self.params.set_portal_color_start(color);
                    log::info!("portal start color = {color}");
                }
                Some(d @ 5..=8) => {
                    let color = END_PRESETS[usize::from(d - 5)];
                    self.params.set_portal_color_end(color);
                    log::info!("portal end color = {color}");
                }
                _ => {}
            },
        }

        PanelAction::Continue
    }
}
