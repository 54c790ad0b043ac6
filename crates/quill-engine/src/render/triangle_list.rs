use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;
use crate::draw_node::{Vertex, DEFAULT_CAPACITY};
use crate::paint::BlendFunc;

use super::{RenderCtx, RenderTarget, TriangleRenderer};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    viewport: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    /// Zero, negative or non-finite viewports would divide by zero in the
    /// vertex shader; they collapse to 1×1 instead.
    fn new(viewport: Viewport) -> Self {
        let viewport = if viewport.is_valid() {
            viewport
        } else {
            log::warn!("invalid viewport {viewport:?}, using 1x1");
            Viewport::new(1.0, 1.0)
        };
        Self {
            viewport: [viewport.width, viewport.height],
            _pad: [0.0; 2],
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x3, // position
    1 => Unorm8x4   // color
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

/// wgpu renderer for draw node triangle lists.
///
/// Pipelines are built lazily, one per (surface format, blend function).
/// The vertex buffer grows by powers of two and is never shrunk.
///
/// Uploads use `queue.write_buffer`, which takes effect at submit time: use
/// one renderer per draw node within a single submitted encoder.
#[derive(Default)]
pub struct TriangleListRenderer {
    pipelines: HashMap<(wgpu::TextureFormat, BlendFunc), wgpu::RenderPipeline>,
    pipeline_layout: Option<wgpu::PipelineLayout>,
    shader: Option<wgpu::ShaderModule>,

    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
}

impl TriangleListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds this renderer to a frame so a draw node can submit into it.
    #[inline]
    pub fn frame<'r, 'a, 't>(
        &'r mut self,
        ctx: &'r RenderCtx<'a>,
        target: &'r mut RenderTarget<'t>,
    ) -> TriangleFrame<'r, 'a, 't> {
        TriangleFrame { renderer: self, ctx, target }
    }

    /// Draws the first `primitive_count` triangles of `vertices` into `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        blend: BlendFunc,
        vertices: &[Vertex],
        primitive_count: usize,
    ) {
        let vertex_count = (primitive_count * 3).min(vertices.len() / 3 * 3);
        if vertex_count == 0 {
            return;
        }

        self.ensure_bindings(ctx);
        self.ensure_pipeline(ctx, blend);
        self.write_viewport_uniform(ctx);
        self.ensure_vertex_capacity(ctx, vertex_count);

        let Some(vbo) = self.vertex_vbo.as_ref() else { return };
        ctx.queue
            .write_buffer(vbo, 0, bytemuck::cast_slice(&vertices[..vertex_count]));

        let Some(pipeline) = self.pipelines.get(&(ctx.surface_format, blend)) else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("quill triangle list pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..vertex_count as u32, 0..1);
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.pipeline_layout.is_some() {
            return;
        }

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("quill triangle list bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<ViewportUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quill triangle list viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quill triangle list bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("quill triangle list pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("quill triangle list shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle_list.wgsl").into()),
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
        self.pipeline_layout = Some(pipeline_layout);
        self.shader = Some(shader);
        self.pipelines.clear();
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, blend: BlendFunc) {
        let key = (ctx.surface_format, blend);
        if self.pipelines.contains_key(&key) {
            return;
        }
        let Some(layout) = self.pipeline_layout.as_ref() else { return };
        let Some(shader) = self.shader.as_ref() else { return };

        log::debug!("building triangle list pipeline for {:?} / {blend:?}", ctx.surface_format);

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quill triangle list pipeline"),
            layout: Some(layout),

            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(blend.to_wgpu()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Builders emit both windings.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipelines.insert(key, pipeline);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform::new(ctx.viewport);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required_vertices: usize) {
        if required_vertices <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }

        let new_cap = required_vertices.next_power_of_two().max(DEFAULT_CAPACITY);
        let new_size = (new_cap * std::mem::size_of::<Vertex>()) as u64;

        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quill triangle list vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

/// A [`TriangleListRenderer`] bound to one frame's context and target.
pub struct TriangleFrame<'r, 'a, 't> {
    renderer: &'r mut TriangleListRenderer,
    ctx: &'r RenderCtx<'a>,
    target: &'r mut RenderTarget<'t>,
}

impl TriangleRenderer for TriangleFrame<'_, '_, '_> {
    fn draw_triangles(&mut self, blend: BlendFunc, vertices: &[Vertex], primitive_count: usize) {
        self.renderer
            .render(self.ctx, self.target, blend, vertices, primitive_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_matches_vertex_struct() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 16);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Unorm8x4);
    }

    #[test]
    fn viewport_uniform_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
    }

    #[test]
    fn valid_viewport_is_written_as_is() {
        let u = ViewportUniform::new(Viewport::new(640.0, 480.0));
        assert_eq!(u.viewport, [640.0, 480.0]);
    }

    #[test]
    fn invalid_viewport_falls_back_to_unit() {
        assert_eq!(ViewportUniform::new(Viewport::new(0.0, 480.0)).viewport, [1.0, 1.0]);
        assert_eq!(ViewportUniform::new(Viewport::new(f32::NAN, 2.0)).viewport, [1.0, 1.0]);
    }
}
