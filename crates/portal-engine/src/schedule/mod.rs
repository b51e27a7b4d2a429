//! Frame scheduling.
//!
//! `FrameScheduler::tick` runs once per display refresh:
//! 1. read the clock and derive the delta
//! 2. advance the animation binding, if one has been handed over
//! 3. write elapsed time into every registered `TimeUniform`
//! 4. step the camera controls
//! 5. render once
//! 6. request the next frame, unless the renderer reports the surface as
//!    suspended; the host restarts the loop once it is drawable again
//!
//! The order is fixed. Collaborators are reached through the traits in
//! `contract`, so the loop can be driven by the winit runtime or by tests.

mod contract;
mod scheduler;

pub use contract::{CameraControl, FrameRenderer, FrameRequester, RenderOutcome};
pub use scheduler::{FrameContext, FrameScheduler, SchedulerConfig};
