use std::path::PathBuf;

use glam::Vec3;

use crate::camera::{OrbitSettings, PerspectiveCamera};
use crate::paint::{Color, ColorParseError};

use super::debug::DebugParams;

/// Where the portal disc sits in the scene.
#[derive(Debug, Clone, Copy)]
pub struct PortalPlacement {
    pub center: Vec3,
    pub radius: f32,
    /// Rotation around +Y, in radians.
    pub yaw: f32,
}

/// Base transform of the fox before its clip is applied.
#[derive(Debug, Clone, Copy)]
pub struct FoxPlacement {
    pub position: Vec3,
    pub yaw: f32,
    pub scale: f32,
}

/// Static scene configuration.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub fireflies_count: usize,
    /// Seed for the fireflies layout; `None` draws a fresh layout per run.
    pub fireflies_seed: Option<u64>,
    pub fireflies_size: f32,
    pub max_pixel_ratio: f32,

    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub orbit: OrbitSettings,

    pub portal: PortalPlacement,
    pub fox: FoxPlacement,
    pub fox_clip: PathBuf,

    /// Initial debug panel colors, as `#rrggbb`.
    pub portal_color_start: String,
    pub portal_color_end: String,
    pub clear_color: String,
}

impl SceneConfig {
    /// Environment override for the fox clip path.
    pub const FOX_CLIP_ENV: &'static str = "PORTAL_FOX_CLIP";

    /// Applies environment overrides on top of `self`.
    pub fn with_env(self) -> Self {
        self.with_fox_clip_override(std::env::var(Self::FOX_CLIP_ENV).ok())
    }

    fn with_fox_clip_override(mut self, path: Option<String>) -> Self {
        if let Some(path) = path
            && !path.trim().is_empty()
        {
            self.fox_clip = PathBuf::from(path);
        }
        self
    }

    /// Debug panel values parsed from the configured colors and size.
    pub fn debug_params(&self) -> Result<DebugParams, ColorParseError> {
        let mut params = DebugParams::new(Color::BLACK, Color::WHITE, Color::BLACK, self.fireflies_size);
        params.set_portal_color_start_hex(&self.portal_color_start)?;
        params.set_portal_color_end_hex(&self.portal_color_end)?;
        params.set_clear_color_hex(&self.clear_color)?;
        Ok(params)
    }

    /// Camera placed per this configuration with the given aspect ratio.
    pub fn camera(&self, aspect: f32) -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(self.camera_fov_deg, aspect, self.camera_near, self.camera_far);
        cam.position = self.camera_position;
        cam.target = self.camera_target;
        cam
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fireflies_count: 50,
            fireflies_seed: None,
            fireflies_size: 200.0,
            max_pixel_ratio: 2.0,

            camera_fov_deg: 45.0,
            camera_near: 0.1,
            camera_far: 100.0,
            camera_position: Vec3::new(4.0, 3.0, 6.0),
            camera_target: Vec3::ZERO,
            orbit: OrbitSettings::default(),

            portal: PortalPlacement {
                center: Vec3::new(0.0, 0.78, -1.7),
                radius: 0.7,
                yaw: 0.0,
            },
            fox: FoxPlacement {
                position: Vec3::new(2.6, 0.0, 0.5),
                yaw: std::f32::consts::PI + 0.4,
                scale: 0.3,
            },
            fox_clip: PathBuf::from("assets/fox-survey.json"),

            portal_color_start: "#000000".to_string(),
            portal_color_end: "#ffffff".to_string(),
            clear_color: "#110e0e".to_string(),
        }
    }
}
