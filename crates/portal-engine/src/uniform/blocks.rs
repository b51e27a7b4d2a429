use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// View-projection block shared by every pass (64 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

/// Per-object model matrix + tint (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub tint: [f32; 4],
}

impl ModelUniform {
    pub fn new(model: Mat4, tint: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            tint,
        }
    }
}

/// Portal shader block (48 bytes).
///
///  offset  0  color_start  vec4   (rgb linear, a unused)
///  offset 16  color_end    vec4
///  offset 32  time         f32
///  offset 36  _pad         [f32; 3]
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct PortalUniform {
    pub color_start: [f32; 4],
    pub color_end: [f32; 4],
    pub time: f32,
    pub _pad: [f32; 3],
}

/// Fireflies shader block (32 bytes).
///
///  offset  0  resolution   vec2   (physical px)
///  offset  8  time         f32
///  offset 12  pixel_ratio  f32
///  offset 16  size         f32
///  offset 20  _pad         [f32; 3]
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct FirefliesUniform {
    pub resolution: [f32; 2],
    pub time: f32,
    pub pixel_ratio: f32,
    pub size: f32,
    pub _pad: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sizes_are_16_byte_multiples() {
        for size in [
            std::mem::size_of::<CameraUniform>(),
            std::mem::size_of::<ModelUniform>(),
            std::mem::size_of::<PortalUniform>(),
            std::mem::size_of::<FirefliesUniform>(),
        ] {
            assert_eq!(size % 16, 0, "size {size}");
        }
        assert_eq!(std::mem::size_of::<PortalUniform>(), 48);
        assert_eq!(std::mem::size_of::<FirefliesUniform>(), 32);
    }
}
