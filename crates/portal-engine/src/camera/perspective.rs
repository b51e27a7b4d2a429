use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at `target`.
///
/// Depth maps to 0..1, matching wgpu clip space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            fov_y_deg,
            aspect: aspect.max(1e-6),
            near: near.max(1e-6),
            far: far.max(near + 1e-3),
        }
    }

    /// Updates the aspect ratio from a drawable size. Zero sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect.max(1e-6),
            self.near,
            self.far,
        )
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_screen_center() {
        let mut cam = PerspectiveCamera::new(45.0, 16.0 / 9.0, 0.1, 100.0);
        cam.position = Vec3::new(4.0, 3.0, 6.0);
        let clip = cam.view_proj() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn set_viewport_ignores_zero_size() {
        let mut cam = PerspectiveCamera::new(45.0, 1.0, 0.1, 100.0);
        cam.set_viewport(1920, 1080);
        assert_eq!(cam.aspect, 1920.0 / 1080.0);
        cam.set_viewport(0, 1080);
        assert_eq!(cam.aspect, 1920.0 / 1080.0);
    }
}
