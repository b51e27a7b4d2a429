//! Animation subsystem.
//!
//! - `binding`: the one-way unbound -> bound handoff between an asynchronous
//!   loader and the frame scheduler
//! - `clip` / `mixer`: keyframe clips and the mixer that turns time into a pose
//! - `loader`: background thread that loads a clip file and performs the bind

mod binding;
mod clip;
mod loader;
mod mixer;

pub use binding::{animation_handoff, AnimationBinder, AnimationBinding, AnimationSlot, BoxedBinding};
pub use clip::{AnimationClip, ClipLibrary, Keyframe, Track};
pub use loader::{ClipLoadError, ClipLoader};
pub use mixer::{AnimationMixer, ClipAction, LoopMode, Pose, SharedPose};
