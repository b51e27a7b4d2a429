//! Scene description: configuration, fireflies layout and debug parameters.

mod config;
mod debug;
mod fireflies;

pub use config::{FoxPlacement, PortalPlacement, SceneConfig};
pub use debug::{DebugParams, FIREFLIES_SIZE_MAX, FIREFLIES_SIZE_MIN};
pub use fireflies::{Firefly, Fireflies};

/// Device pixel ratio used by shaders, capped to keep fill rate bounded.
#[inline]
pub fn pixel_ratio(scale_factor: f64, max: f32) -> f32 {
    (scale_factor as f32).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_capped() {
        assert_eq!(pixel_ratio(1.0, 2.0), 1.0);
        assert_eq!(pixel_ratio(1.5, 2.0), 1.5);
        assert_eq!(pixel_ratio(3.0, 2.0), 2.0);
    }
}
