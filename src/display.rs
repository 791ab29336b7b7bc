//! Preview window: draws a synthesized image with `wgpu`.

use std::num::NonZeroU32;

use bytemuck::{Pod, Zeroable};
use log::{debug, error};
use wgpu_julia::{screen, Image, PixelFormat};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::{uniform::Uniform, AppError};

/// Corresponds to `shader.wgsl#ViewSize`.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug)]
struct ViewSize {
    screen: [f32; 2],
    image: [f32; 2],
}

struct Display {
    surface: wgpu::Surface,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_configuration: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    render_bind_group: wgpu::BindGroup,
    view_size: Uniform<ViewSize>,
    image_size: [f32; 2],
}

/// The preview uploads the whole image as one texture.
fn check_texture_size(size: screen::Size, max_texture_dimension: u32) -> Result<(), AppError> {
    if size.width > max_texture_dimension || size.height > max_texture_dimension {
        return Err(AppError::ImageTooLarge {
            width: size.width,
            height: size.height,
            max: max_texture_dimension,
        });
    }
    Ok(())
}

fn texture_format(format: PixelFormat) -> wgpu::TextureFormat {
    match format {
        PixelFormat::Rgba8 => wgpu::TextureFormat::Rgba8Unorm,
        PixelFormat::Bgra8 => wgpu::TextureFormat::Bgra8Unorm,
    }
}

impl Display {
    fn new(window: &Window, image: &Image) -> Result<Self, AppError> {
        let instance = wgpu::Instance::new(wgpu::Backends::all());

        let size = window.inner_size();
        let surface = unsafe { instance.create_surface(window) };

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: Default::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .ok_or(AppError::RequestAdapter)?;
        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("device"),
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::default(),
            },
            None,
        ))?;

        // The image already holds display-ready bytes, so avoid a second sRGB encode.
        let supported_formats = surface.get_supported_formats(&adapter);
        let surface_format = supported_formats
            .iter()
            .copied()
            .find(|format| !format.describe().srgb)
            .or_else(|| supported_formats.first().copied())
            .ok_or(AppError::IncompatibleSurface)?;
        debug!("surface format {:?}", surface_format);

        let surface_configuration = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
        };
        surface.configure(&device, &surface_configuration);

        let image_size = image.size();
        check_texture_size(image_size, device.limits().max_texture_dimension_2d)?;
        let extent = wgpu::Extent3d {
            width: image_size.width,
            height: image_size.height,
            depth_or_array_layers: 1,
        };
        let image_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("image-texture"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: texture_format(image.format()),
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        });
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &image_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_bytes(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: NonZeroU32::new(image.bytes_per_row() as u32),
                rows_per_image: NonZeroU32::new(image_size.height),
            },
            extent,
        );
        let image_texture_view =
            image_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let image_size = [image_size.width as f32, image_size.height as f32];
        let view_size = Uniform::new(
            &device,
            "view-size-buffer",
            ViewSize {
                screen: [
                    surface_configuration.width as f32,
                    surface_configuration.height as f32,
                ],
                image: image_size,
            },
        );

        let render_shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("render-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let render_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("render-bind-group-layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: false },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::NonFiltering),
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("render-pipeline-layout"),
                bind_group_layouts: &[&render_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render-pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &render_shader_module,
                entry_point: "vertex_main",
                buffers: &[],
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &render_shader_module,
                entry_point: "fragment_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_configuration.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        // Nearest filtering keeps individual pixels visible when zoomed in.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor::default());

        let render_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("render-bind-group"),
            layout: &render_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&image_texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: view_size.binding_resource(),
                },
            ],
        });

        Ok(Self {
            surface,
            device,
            queue,
            surface_configuration,
            render_pipeline,
            render_bind_group,
            view_size,
            image_size,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        // Minimized windows report a zero size, which can't be configured.
        if size.width == 0 || size.height == 0 {
            return;
        }
        debug!("resizing to {:?}", size);

        self.surface_configuration.width = size.width;
        self.surface_configuration.height = size.height;
        self.surface.configure(&self.device, &self.surface_configuration);

        self.view_size.write(
            &self.queue,
            ViewSize {
                screen: [size.width as f32, size.height as f32],
                image: self.image_size,
            },
        );
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let command_encoder = {
            let mut command_encoder =
                self.device
                    .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                        label: Some("command-encoder"),
                    });

            command_encoder.push_debug_group("render-pass");
            {
                let mut render_pass =
                    command_encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("render-pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &surface_texture_view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                                store: true,
                            },
                        })],
                        depth_stencil_attachment: None,
                    });

                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_bind_group(0, &self.render_bind_group, &[]);
                render_pass.draw(0..4, 0..1);
            }
            command_encoder.pop_debug_group();

            command_encoder
        };

        self.queue.submit([command_encoder.finish()]);
        surface_texture.present();
        Ok(())
    }
}

/// Open a window showing `image` until it is closed.
pub fn run(image: Image, title: &str) -> Result<(), AppError> {
    let event_loop = EventLoop::new();
    let image_size = image.size();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(image_size.width, image_size.height))
        .build(&event_loop)?;

    let mut display = Display::new(&window, &image)?;
    drop(image);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    display.resize(size);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    display.resize(*new_inner_size);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                match display.render() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        display.resize(window.inner_size());
                        window.request_redraw();
                    }
                    Err(err) => {
                        error!("failed to render: {}", err);
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            _ => {}
        }
    })
}
