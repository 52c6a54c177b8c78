use std::error::Error;
use std::fmt;

use log::info;
use pixels::wgpu;
use pixels::wgpu::util::DeviceExt;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::window::Window;

use crate::controllers::render::Renderer;
use crate::core::colour_map::ColourMapKind;
use crate::core::data::frame_uniforms::FrameUniforms;
use crate::core::data::viewport::Viewport;
use crate::presenters::gpu::uniforms::ShaderUniforms;

#[derive(Debug)]
pub enum GpuRendererError {
    Surface(pixels::Error),
    Texture(pixels::TextureError),
    Pipeline(String),
}

impl fmt::Display for GpuRendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "surface error: {}", e),
            Self::Texture(e) => write!(f, "surface texture error: {}", e),
            Self::Pipeline(message) => write!(f, "failed to build shader pipeline: {}", message),
        }
    }
}

impl Error for GpuRendererError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            Self::Texture(e) => Some(e),
            Self::Pipeline(_) => None,
        }
    }
}

/// Draws the fractal with a fragment shader on the `pixels` wgpu device.
///
/// The `pixels` frame buffer itself is never drawn: the shader covers the
/// whole surface, so it is kept at 1x1.
pub struct GpuRenderer {
    pixels: Pixels<'static>,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniforms: ShaderUniforms,
}

impl GpuRenderer {
    pub fn new(
        window: &'static Window,
        initial: &FrameUniforms,
        colour_map: ColourMapKind,
    ) -> Result<Self, GpuRendererError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = PixelsBuilder::new(1, 1, surface_texture)
            .clear_color(wgpu::Color::BLACK)
            .build()
            .map_err(GpuRendererError::Surface)?;

        let adapter_info = pixels.adapter().get_info();
        info!("GPU adapter: {} ({:?})", adapter_info.name, adapter_info.backend);

        let device = pixels.device();

        // Catch shader/pipeline validation errors here rather than panicking later.
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mandelbrot"),
            source: wgpu::ShaderSource::Wgsl(include_str!("mandelbrot.wgsl").into()),
        });

        let uniforms = ShaderUniforms::new(initial, colour_map);

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mandelbrot uniforms"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mandelbrot uniforms"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mandelbrot uniforms"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mandelbrot"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mandelbrot"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[],
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: pixels.render_texture_format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(GpuRendererError::Pipeline(error.to_string()));
        }

        Ok(Self {
            pixels,
            pipeline,
            uniform_buffer,
            bind_group,
            uniforms,
        })
    }

    fn upload_uniforms(&self) {
        self.pixels
            .queue()
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
    }
}

impl Renderer for GpuRenderer {
    type Error = GpuRendererError;

    fn set_viewport(&mut self, viewport: Viewport) -> Result<(), Self::Error> {
        self.pixels
            .resize_surface(viewport.width(), viewport.height())
            .map_err(GpuRendererError::Texture)?;

        self.uniforms.set_viewport(viewport);
        self.upload_uniforms();

        Ok(())
    }

    fn set_uniforms(&mut self, uniforms: &FrameUniforms) {
        self.uniforms.set_frame(uniforms);
        self.upload_uniforms();
    }

    fn draw_frame(&mut self) -> Result<(), Self::Error> {
        let pipeline = &self.pipeline;
        let bind_group = &self.bind_group;

        self.pixels
            .render_with(|encoder, render_target, _context| {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("mandelbrot"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, bind_group, &[]);
                render_pass.draw(0..3, 0..1);

                Ok(())
            })
            .map_err(GpuRendererError::Surface)
    }
}
