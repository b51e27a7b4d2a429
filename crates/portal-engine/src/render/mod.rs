//! GPU rendering.
//!
//! Each pass owns its pipeline and buffers and draws into a shared render pass
//! opened by `ScenePresenter`. Draw order: portal, fox, fireflies (additive,
//! no depth).

mod common;
mod ctx;
mod fireflies;
mod fox;
mod portal;
mod presenter;

pub use ctx::RenderCtx;
pub use fireflies::FirefliesPass;
pub use fox::FoxPass;
pub use portal::PortalPass;
pub use presenter::{ScenePasses, ScenePresenter};
