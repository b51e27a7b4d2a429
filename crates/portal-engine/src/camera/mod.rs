//! Camera: perspective projection and damped orbit controls.

mod orbit;
mod perspective;

pub use orbit::{OrbitControls, OrbitSettings};
pub use perspective::PerspectiveCamera;
