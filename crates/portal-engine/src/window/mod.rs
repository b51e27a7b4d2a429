//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window, wires them to the GPU layer and
//! forwards redraws to the application.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
