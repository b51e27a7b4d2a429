//! Time subsystem.
//!
//! Provides the session clock and the per-frame delta bookkeeping used by the
//! frame scheduler. Nothing here touches the platform loop, so it can be driven
//! from tests with a scripted clock.

mod clock;
mod frame_state;

pub use clock::{ElapsedClock, MonotonicClock};
pub use frame_state::{FirstFrameDelta, FrameState, FrameTime};
