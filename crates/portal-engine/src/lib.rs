//! Portal engine crate.
//!
//! Owns the per-frame scheduler, the animation/camera/uniform pieces it drives,
//! and the platform + GPU runtime that renders the portal scene.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
pub mod paint;
pub mod scene;

pub mod animation;
pub mod camera;
pub mod schedule;
pub mod uniform;
