use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected `#rrggbb`, got `{0}`")]
    Format(String),
}

/// Opaque color stored as straight sRGB bytes.
///
/// Shaders receive linear values via `to_linear`; the surface is sRGB, so the
/// hardware encodes them back on write.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Format(s.to_string()));
        }
        let hex = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::Format(s.to_string()))?;
        Ok(Self::from_u32(hex))
    }

    /// Linear RGBA with alpha 1.
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            1.0,
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_linear();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#110e0e"), Ok(Color::rgb(0x11, 0x0e, 0x0e)));
        assert_eq!("ffffe5".parse::<Color>(), Ok(Color::rgb(0xff, 0xff, 0xe5)));
    }

    #[test]
    fn rejects_bad_hex() {
        for bad in ["", "#fff", "#gggggg", "#1234567", "#12345+"] {
            assert!(Color::from_hex(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn display_round_trips() {
        let c = Color::from_hex("#99967C").unwrap();
        assert_eq!(c.to_string(), "#99967c");
    }

    #[test]
    fn linear_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::WHITE.to_linear(), [1.0, 1.0, 1.0, 1.0]);
        let mid = Color::rgb(128, 128, 128).to_linear()[0];
        assert!(mid > 0.2 && mid < 0.23);
    }
}
