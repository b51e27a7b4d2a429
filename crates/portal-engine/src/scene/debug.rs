use crate::paint::{Color, ColorParseError};

pub const FIREFLIES_SIZE_MIN: f32 = 0.0;
pub const FIREFLIES_SIZE_MAX: f32 = 500.0;

/// Values exposed on the debug panel.
///
/// Setters normalize their input: sizes are rounded to whole steps and clamped
/// to `[FIREFLIES_SIZE_MIN, FIREFLIES_SIZE_MAX]`, colors are parsed from hex.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugParams {
    portal_color_start: Color,
    portal_color_end: Color,
    clear_color: Color,
    fireflies_size: f32,
}

impl DebugParams {
    pub fn new(portal_color_start: Color, portal_color_end: Color, clear_color: Color, fireflies_size: f32) -> Self {
        let mut params = Self {
            portal_color_start,
            portal_color_end,
            clear_color,
            fireflies_size: 0.0,
        };
        params.set_fireflies_size(fireflies_size);
        params
    }

    pub fn portal_color_start(&self) -> Color {
        self.portal_color_start
    }

    pub fn portal_color_end(&self) -> Color {
        self.portal_color_end
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn fireflies_size(&self) -> f32 {
        self.fireflies_size
    }

    pub fn set_portal_color_start(&mut self, color: Color) {
        self.portal_color_start = color;
    }

    pub fn set_portal_color_end(&mut self, color: Color) {
        self.portal_color_end = color;
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    pub fn set_portal_color_start_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        self.portal_color_start = Color::from_hex(hex)?;
        Ok(())
    }

    pub fn set_portal_color_end_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        self.portal_color_end = Color::from_hex(hex)?;
        Ok(())
    }

    pub fn set_clear_color_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        self.clear_color = Color::from_hex(hex)?;
        Ok(())
    }

    /// Returns the stored (normalized) size.
    pub fn set_fireflies_size(&mut self, size: f32) -> f32 {
        let size = if size.is_finite() { size.round() } else { FIREFLIES_SIZE_MIN };
        self.fireflies_size = size.clamp(FIREFLIES_SIZE_MIN, FIREFLIES_SIZE_MAX);
        self.fireflies_size
    }

    pub fn nudge_fireflies_size(&mut self, by: f32) -> f32 {
        self.set_fireflies_size(self.fireflies_size + by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DebugParams {
        DebugParams::new(Color::BLACK, Color::WHITE, Color::from_u32(0x110e0e), 200.0)
    }

    #[test]
    fn size_is_stepped_and_clamped() {
        let mut p = params();
        assert_eq!(p.fireflies_size(), 200.0);
        assert_eq!(p.set_fireflies_size(12.4), 12.0);
        assert_eq!(p.set_fireflies_size(-3.0), 0.0);
        assert_eq!(p.set_fireflies_size(900.0), 500.0);
        assert_eq!(p.set_fireflies_size(f32::NAN), 0.0);
        assert_eq!(p.nudge_fireflies_size(10.0), 10.0);
    }

    #[test]
    fn hex_setters_keep_old_value_on_error() {
        let mut p = params();
        p.set_portal_color_start_hex("#ff8800").unwrap();
        assert_eq!(p.portal_color_start(), Color::rgb(0xff, 0x88, 0x00));

        assert!(p.set_clear_color_hex("nope").is_err());
        assert_eq!(p.clear_color(), Color::from_u32(0x110e0e));

        p.set_portal_color_end_hex("000000").unwrap();
        assert_eq!(p.portal_color_end(), Color::BLACK);
    }

    #[test]
    fn constructor_normalizes_size() {
        let p = DebugParams::new(Color::BLACK, Color::WHITE, Color::BLACK, 1000.0);
        assert_eq!(p.fireflies_size(), FIREFLIES_SIZE_MAX);
    }
}
