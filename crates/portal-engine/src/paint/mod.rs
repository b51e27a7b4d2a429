//! Color values used by materials and the clear pass.

mod color;

pub use color::{Color, ColorParseError};
