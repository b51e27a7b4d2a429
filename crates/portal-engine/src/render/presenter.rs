use anyhow::Result;

use crate::animation::SharedPose;
use crate::camera::PerspectiveCamera;
use crate::device::Gpu;
use crate::scene::{DebugParams, Fireflies, SceneConfig};
use crate::schedule::{FrameRenderer, RenderOutcome};
use crate::uniform::{CameraUniform, TimeUniform};

use super::common::UniformBlock;
use super::ctx::RenderCtx;
use super::fireflies::FirefliesPass;
use super::fox::FoxPass;
use super::portal::PortalPass;

/// All GPU resources of the portal scene.
pub struct ScenePasses {
    camera: UniformBlock<CameraUniform>,
    pub portal: PortalPass,
    pub fox: FoxPass,
    pub fireflies: FirefliesPass,
}

impl ScenePasses {
    pub fn new(
        ctx: &RenderCtx<'_>,
        config: &SceneConfig,
        fireflies: &Fireflies,
        portal_time: TimeUniform,
        fireflies_time: TimeUniform,
        fox_pose: SharedPose,
        pixel_ratio: f32,
    ) -> Self {
        let camera = UniformBlock::new(
            ctx.device,
            "camera",
            wgpu::ShaderStages::VERTEX,
            &CameraUniform::new(glam::Mat4::IDENTITY),
        );

        let portal = PortalPass::new(ctx, &camera.layout, config.portal, portal_time);
        let fox = FoxPass::new(ctx, &camera.layout, fox_pose);
        let fireflies_pass = FirefliesPass::new(ctx, &camera.layout, fireflies, fireflies_time, pixel_ratio);

        log::debug!("scene passes created ({} fireflies)", fireflies.len());

        Self {
            camera,
            portal,
            fox,
            fireflies: fireflies_pass,
        }
    }

    fn prepare(&mut self, ctx: &RenderCtx<'_>, camera: &PerspectiveCamera, params: &DebugParams) {
        self.camera
            .write(ctx.queue, &CameraUniform::new(camera.view_proj()));
        self.portal.prepare(ctx, params);
        self.fox.prepare(ctx);
        self.fireflies.prepare(ctx, params.fireflies_size());
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.camera.bind_group, &[]);
        self.portal.draw(rpass);
        self.fox.draw(rpass);
        self.fireflies.draw(rpass);
    }
}

/// Renders `ScenePasses` into the window surface.
pub struct ScenePresenter<'a, 'w> {
    pub gpu: &'a mut Gpu<'w>,
    pub passes: &'a mut ScenePasses,
    pub params: &'a DebugParams,
}

impl FrameRenderer<PerspectiveCamera> for ScenePresenter<'_, '_> {
    fn render(&mut self, camera: &PerspectiveCamera) -> Result<RenderOutcome> {
        if !self.gpu.is_drawable() {
            return Ok(RenderOutcome::Suspended);
        }
        let Some(mut frame) = self.gpu.acquire()? else {
            return Ok(RenderOutcome::Skipped);
        };

        let size = self.gpu.size();
        let ctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            [size.width as f32, size.height as f32],
        );

        self.passes.prepare(&ctx, camera, self.params);

        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("portal scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.params.clear_color().to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            self.passes.draw(&mut rpass);
        }

        self.gpu.present(frame);
        Ok(RenderOutcome::Presented)
    }
}
