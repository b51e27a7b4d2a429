use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::input::{InputFrame, InputState, MouseButton};
use crate::schedule::CameraControl;

use super::perspective::PerspectiveCamera;

const EPS: f32 = 1e-6;

/// Tuning for `OrbitControls`.
#[derive(Debug, Clone, Copy)]
pub struct OrbitSettings {
    pub enable_damping: bool,
    /// Fraction of the pending rotation applied per step.
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle limits in radians, measured from +Y.
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.5,
            max_distance: 50.0,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SphericalDelta {
    theta: f32,
    phi: f32,
}

/// Orbit rig around `camera.target`.
///
/// Input accumulates a pending rotation; every `update()` applies a
/// `damping_factor` share of it and decays the remainder, so the camera keeps
/// gliding for a few frames after the pointer stops.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    camera: PerspectiveCamera,
    pub settings: OrbitSettings,
    delta: SphericalDelta,
    scale: f32,
    viewport_height: f32,
}

impl OrbitControls {
    pub fn new(camera: PerspectiveCamera, settings: OrbitSettings) -> Self {
        Self {
            camera,
            settings,
            delta: SphericalDelta::default(),
            scale: 1.0,
            viewport_height: 1.0,
        }
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Keeps the camera aspect and the drag sensitivity in sync with the surface.
    ///
    /// `width`/`height` are physical pixels; drags are measured in logical pixels.
    pub fn set_viewport(&mut self, width: u32, height: u32, scale_factor: f64) {
        self.camera.set_viewport(width, height);
        if height > 0 && scale_factor > 0.0 {
            self.viewport_height = (height as f64 / scale_factor) as f32;
        }
    }

    /// Rotates around the target by `angle` radians (positive moves the camera left).
    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    /// Tilts by `angle` radians (positive moves the camera up).
    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    /// Moves toward the target. `factor` < 1 zooms in.
    pub fn dolly(&mut self, factor: f32) {
        if factor > 0.0 {
            self.scale *= factor;
        }
    }

    /// True while a damped rotation is still being applied.
    pub fn is_moving(&self) -> bool {
        self.delta != SphericalDelta::default() || self.scale != 1.0
    }

    /// Feeds one frame of pointer input: left-drag orbits, wheel dollies.
    pub fn handle_input(&mut self, input: &InputState, frame: &InputFrame) {
        if input.button_down(MouseButton::Left) {
            let (dx, dy) = frame.pointer_delta;
            let h = self.viewport_height.max(1.0);
            self.rotate_left(TAU * dx / h * self.settings.rotate_speed);
            self.rotate_up(TAU * dy / h * self.settings.rotate_speed);
        }

        let wheel = frame.wheel_lines;
        if wheel != 0.0 {
            let zoom_scale = 0.95f32.powf(self.settings.zoom_speed);
            self.dolly(zoom_scale.powf(wheel));
        }
    }

    /// Applies pending input toward the camera position.
    pub fn update(&mut self) {
        let s = self.settings;
        let offset = self.camera.position - self.camera.target;

        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > EPS {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, PI / 2.0)
        };

        if s.enable_damping {
            theta += self.delta.theta * s.damping_factor;
            phi += self.delta.phi * s.damping_factor;
        } else {
            theta += self.delta.theta;
            phi += self.delta.phi;
        }

        phi = phi
            .clamp(s.min_polar_angle, s.max_polar_angle)
            .clamp(EPS, PI - EPS);

        radius = (radius * self.scale).clamp(s.min_distance, s.max_distance);

        let sin_phi = phi.sin();
        let next = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        self.camera.position = self.camera.target + next;

        if s.enable_damping {
            self.delta.theta *= 1.0 - s.damping_factor;
            self.delta.phi *= 1.0 - s.damping_factor;
            if self.delta.theta.abs() < EPS && self.delta.phi.abs() < EPS {
                self.delta = SphericalDelta::default();
            }
        } else {
            self.delta = SphericalDelta::default();
        }
        self.scale = 1.0;
    }
}

impl CameraControl for OrbitControls {
    type Camera = PerspectiveCamera;

    #[inline]
    fn step(&mut self) {
        self.update();
    }

    #[inline]
    fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> OrbitControls {
        let mut cam = PerspectiveCamera::new(45.0, 1.0, 0.1, 100.0);
        cam.position = Vec3::new(4.0, 3.0, 6.0);
        OrbitControls::new(cam, OrbitSettings::default())
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn settled_update_keeps_position() {
        let mut c = controls();
        let start = c.camera().position;
        for _ in 0..10 {
            c.update();
        }
        assert!(close(c.camera().position, start));
        assert!(!c.is_moving());
    }

    #[test]
    fn damping_spreads_rotation_over_frames() {
        let mut c = controls();
        let radius = c.camera().position.length();
        c.rotate_left(0.5);

        c.update();
        let after_one = c.camera().position;
        assert!(c.is_moving());

        for _ in 0..500 {
            c.update();
        }
        let settled = c.camera().position;
        assert!(!c.is_moving());

        // One step applies only the damping share of the rotation.
        let start_theta = 4.0f32.atan2(6.0);
        let one_theta = after_one.x.atan2(after_one.z);
        let end_theta = settled.x.atan2(settled.z);
        assert!(((start_theta - one_theta) - 0.5 * 0.05).abs() < 1e-4);
        assert!(((start_theta - end_theta) - 0.5).abs() < 1e-3);
        assert!((settled.length() - radius).abs() < 1e-4);
    }

    #[test]
    fn without_damping_rotation_applies_at_once() {
        let mut c = controls();
        c.settings.enable_damping = false;
        c.rotate_left(0.25);
        c.update();
        assert!(!c.is_moving());
    }

    #[test]
    fn polar_angle_stays_off_the_poles() {
        let mut c = controls();
        c.settings.enable_damping = false;
        c.rotate_up(10.0);
        c.update();
        let p = c.camera().position;
        assert!(p.y > 0.0);
        assert!(p.x.abs() + p.z.abs() > 0.0);
    }

    #[test]
    fn dolly_is_clamped() {
        let mut c = controls();
        c.dolly(0.0001);
        c.update();
        assert!((c.camera().position.length() - c.settings.min_distance).abs() < 1e-4);

        c.dolly(1e6);
        c.update();
        assert!((c.camera().position.length() - c.settings.max_distance).abs() < 1e-3);
    }

    #[test]
    fn left_drag_and_wheel_feed_the_rig() {
        let mut c = controls();
        c.set_viewport(800, 600, 1.0);

        let mut input = InputState::default();
        input.buttons_down.insert(MouseButton::Left);
        let mut frame = InputFrame::default();
        frame.pointer_delta = (60.0, 0.0);
        frame.wheel_lines = 1.0;

        c.handle_input(&input, &frame);
        assert!(c.is_moving());

        let before = c.camera().position.length();
        c.update();
        assert!(c.camera().position.length() < before);
    }

    #[test]
    fn step_is_update() {
        let mut c = controls();
        c.rotate_left(1.0);
        CameraControl::step(&mut c);
        assert!(!close(CameraControl::camera(&c).position, Vec3::new(4.0, 3.0, 6.0)));
    }
}
