//! Shader uniforms.
//!
//! `TimeUniform` is the scalar slot the scheduler writes every frame; the
//! `*Uniform` blocks are the std140-compatible layouts uploaded by the passes.

mod blocks;
mod time;

pub use blocks::{CameraUniform, FirefliesUniform, ModelUniform, PortalUniform};
pub use time::TimeUniform;
