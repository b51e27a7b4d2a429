/// Renderer-facing context: device/queue, surface format and drawable size.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Physical pixels.
    pub resolution: [f32; 2],
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        resolution: [f32; 2],
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            resolution,
        }
    }
}
