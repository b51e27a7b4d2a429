use crate::animation::SharedPose;
use crate::uniform::ModelUniform;

use super::common::{create_pipeline, PipelineDesc, QuadMesh, QuadVertex, UniformBlock};
use super::ctx::RenderCtx;

const FOX_TINT: [f32; 4] = [0.93, 0.42, 0.11, 1.0];

/// Fox marker, posed by the animation mixer.
///
/// Nothing is drawn until the mixer has written its first pose.
pub struct FoxPass {
    pipeline: wgpu::RenderPipeline,
    quad: QuadMesh,
    model: UniformBlock<ModelUniform>,
    pose: SharedPose,
    visible: bool,
}

impl FoxPass {
    pub fn new(ctx: &RenderCtx<'_>, camera_layout: &wgpu::BindGroupLayout, pose: SharedPose) -> Self {
        let initial = ModelUniform::new(pose.lock().model_matrix(), FOX_TINT);
        let model = UniformBlock::new(
            ctx.device,
            "fox model",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            &initial,
        );

        let pipeline = create_pipeline(
            ctx.device,
            ctx.surface_format,
            PipelineDesc {
                label: "fox",
                shader: include_str!("shaders/fox.wgsl"),
                bind_group_layouts: &[camera_layout, &model.layout],
                buffers: &[QuadVertex::layout()],
                blend: wgpu::BlendState::ALPHA_BLENDING,
            },
        );

        Self {
            pipeline,
            quad: QuadMesh::new(ctx.device, "fox"),
            model,
            pose,
            visible: false,
        }
    }

    pub fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        let pose = *self.pose.lock();
        self.visible = pose.visible;
        if self.visible {
            self.model
                .write(ctx.queue, &ModelUniform::new(pose.model_matrix(), FOX_TINT));
        }
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if !self.visible {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.model.bind_group, &[]);
        self.quad.bind(rpass);
        rpass.draw_indexed(0..6, 0, 0..1);
    }
}
