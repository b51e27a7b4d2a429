use glam::{Mat4, Quat, Vec3};

use crate::scene::{DebugParams, PortalPlacement};
use crate::uniform::{ModelUniform, PortalUniform, TimeUniform};

use super::common::{create_pipeline, PipelineDesc, QuadMesh, QuadVertex, UniformBlock};
use super::ctx::RenderCtx;

/// Portal disc: animated noise blended between the start and end colors.
pub struct PortalPass {
    pipeline: wgpu::RenderPipeline,
    quad: QuadMesh,
    model: UniformBlock<ModelUniform>,
    material: UniformBlock<PortalUniform>,
    time: TimeUniform,
}

impl PortalPass {
    pub fn new(
        ctx: &RenderCtx<'_>,
        camera_layout: &wgpu::BindGroupLayout,
        placement: PortalPlacement,
        time: TimeUniform,
    ) -> Self {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(placement.radius),
            Quat::from_rotation_y(placement.yaw),
            placement.center,
        );
        let model = UniformBlock::new(
            ctx.device,
            "portal model",
            wgpu::ShaderStages::VERTEX,
            &ModelUniform::new(model, [1.0; 4]),
        );
        let material = UniformBlock::new(
            ctx.device,
            "portal material",
            wgpu::ShaderStages::FRAGMENT,
            &PortalUniform {
                color_start: [0.0, 0.0, 0.0, 1.0],
                color_end: [1.0; 4],
                time: 0.0,
                _pad: [0.0; 3],
            },
        );

        let pipeline = create_pipeline(
            ctx.device,
            ctx.surface_format,
            PipelineDesc {
                label: "portal",
                shader: include_str!("shaders/portal.wgsl"),
                bind_group_layouts: &[camera_layout, &model.layout, &material.layout],
                buffers: &[QuadVertex::layout()],
                blend: wgpu::BlendState::REPLACE,
            },
        );

        Self {
            pipeline,
            quad: QuadMesh::new(ctx.device, "portal"),
            model,
            material,
            time,
        }
    }

    /// Uploads the current time and colors.
    pub fn prepare(&self, ctx: &RenderCtx<'_>, params: &DebugParams) {
        self.material.write(
            ctx.queue,
            &PortalUniform {
                color_start: params.portal_color_start().to_linear(),
                color_end: params.portal_color_end().to_linear(),
                time: self.time.get_f32(),
                _pad: [0.0; 3],
            },
        );
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.model.bind_group, &[]);
        rpass.set_bind_group(2, &self.material.bind_group, &[]);
        self.quad.bind(rpass);
        rpass.draw_indexed(0..6, 0, 0..1);
    }
}
