use wgpu::util::DeviceExt;

use crate::scene::{Fireflies, Firefly};
use crate::uniform::{FirefliesUniform, TimeUniform};

use super::common::{additive_blend, create_pipeline, PipelineDesc, QuadMesh, QuadVertex, UniformBlock};
use super::ctx::RenderCtx;

/// Instanced, additively blended firefly sprites.
///
/// Sprite size in physical pixels is `size * scale * pixel_ratio / depth`.
pub struct FirefliesPass {
    pipeline: wgpu::RenderPipeline,
    quad: QuadMesh,
    instances: wgpu::Buffer,
    instance_count: u32,
    material: UniformBlock<FirefliesUniform>,
    time: TimeUniform,
    pixel_ratio: f32,
}

impl FirefliesPass {
    pub fn new(
        ctx: &RenderCtx<'_>,
        camera_layout: &wgpu::BindGroupLayout,
        fireflies: &Fireflies,
        time: TimeUniform,
        pixel_ratio: f32,
    ) -> Self {
        let material = UniformBlock::new(
            ctx.device,
            "fireflies material",
            wgpu::ShaderStages::VERTEX,
            &FirefliesUniform {
                resolution: ctx.resolution,
                time: 0.0,
                pixel_ratio,
                size: 0.0,
                _pad: [0.0; 3],
            },
        );

        // An empty vertex buffer is invalid; keep one zeroed instance and draw 0.
        let data: Vec<Firefly> = if fireflies.is_empty() {
            vec![bytemuck::Zeroable::zeroed()]
        } else {
            fireflies.instances.clone()
        };
        let instances = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fireflies instance vbo"),
            contents: bytemuck::cast_slice(&data),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let pipeline = create_pipeline(
            ctx.device,
            ctx.surface_format,
            PipelineDesc {
                label: "fireflies",
                shader: include_str!("shaders/fireflies.wgsl"),
                bind_group_layouts: &[camera_layout, &material.layout],
                buffers: &[QuadVertex::layout(), instance_layout()],
                blend: additive_blend(),
            },
        );

        Self {
            pipeline,
            quad: QuadMesh::new(ctx.device, "fireflies"),
            instances,
            instance_count: fireflies.len() as u32,
            material,
            time,
            pixel_ratio,
        }
    }

    pub fn set_pixel_ratio(&mut self, pixel_ratio: f32) {
        self.pixel_ratio = pixel_ratio;
    }

    pub fn prepare(&self, ctx: &RenderCtx<'_>, size: f32) {
        self.material.write(
            ctx.queue,
            &FirefliesUniform {
                resolution: ctx.resolution,
                time: self.time.get_f32(),
                pixel_ratio: self.pixel_ratio,
                size,
                _pad: [0.0; 3],
            },
        );
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.material.bind_group, &[]);
        self.quad.bind(rpass);
        rpass.set_vertex_buffer(1, self.instances.slice(..));
        rpass.draw_indexed(0..6, 0, 0..self.instance_count);
    }
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    1 => Float32x3, // position
    2 => Float32    // scale
];

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Firefly>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    }
}
