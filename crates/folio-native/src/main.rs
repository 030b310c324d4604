//! Desktop preview of the scene. The mouse wheel stands in for page scroll
//! so every phase transition can be exercised without a browser; highlight
//! changes are logged instead of driving a DOM panel.

use std::time::Instant;

use folio_core::{
    world_viewport, DeviceClass, FloatBounds, PresentationState, RenderInstance, SceneComposer,
    ScrollState, CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR, CAMERA_Z,
};
use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

// One wheel "line" worth of scroll, in px
const WHEEL_LINE_PX: f32 = 80.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

const INSTANCE_CAPACITY: usize = 32;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene"),
            source: wgpu::ShaderSource::Wgsl(folio_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertices for two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<RenderInstance>() * INSTANCE_CAPACITY) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data (pos, scale, color, rot, glow)
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<RenderInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 32,
                        shader_location: 4,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 36,
                        shader_location: 5,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            width: size.width,
            height: size.height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn view_proj(&self) -> [[f32; 4]; 4] {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect, CAMERA_NEAR, CAMERA_FAR);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        (proj * view).to_cols_array_2d()
    }

    fn render(&mut self, instances: &[RenderInstance]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: self.view_proj(),
            }),
        );
        let count = instances.len().min(INSTANCE_CAPACITY);
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances[..count]));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.02,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..(count as u32));
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn ndc_to_ray(ndc: [f32; 2], aspect: f32) -> (Vec3, Vec3) {
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect, CAMERA_NEAR, CAMERA_FAR);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc[0], ndc[1], 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    let ro = Vec3::new(0.0, 0.0, CAMERA_Z);
    let rd = (far - ro).normalize();
    (ro, rd)
}

fn nearest_hit(ray_origin: Vec3, ray_dir: Vec3, targets: &[(Vec3, f32)]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in targets.iter().enumerate() {
        let oc = ray_origin - *center;
        let b = oc.dot(ray_dir);
        let c = oc.dot(oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            continue;
        }
        let t = -b - disc.sqrt();
        if t < 0.0 {
            continue;
        }
        match best {
            Some((_, bt)) if t >= bt => {}
            _ => best = Some((i, t)),
        }
    }
    best.map(|(i, _)| i)
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("folio (native preview)")
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(GpuState::new(&window)).expect("gpu");

    let mut composer = SceneComposer::new(42);
    let mut scroll = ScrollState::default();
    scroll.update(0.0, state.height as f32);
    let mut pointer_ndc: Option<[f32; 2]> = None;
    let mut last_frame = Instant::now();
    let mut logged_phase: Option<PresentationState> = None;
    let mut logged_highlight: Option<usize> = None;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    state.resize(size);
                    let offset = scroll.offset_px;
                    scroll.update(offset, size.height as f32);
                }
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::MouseWheel { delta, .. } => {
                    let dy = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y * WHEEL_LINE_PX,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                    };
                    let offset = (scroll.offset_px - dy).max(0.0);
                    let viewport = scroll.viewport_px;
                    scroll.update(offset, viewport);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let w = state.width.max(1) as f32;
                    let h = state.height.max(1) as f32;
                    pointer_ndc = Some([
                        (position.x as f32 / w) * 2.0 - 1.0,
                        1.0 - (position.y as f32 / h) * 2.0,
                    ]);
                }
                WindowEvent::CursorLeft { .. } => pointer_ndc = None,
                _ => {}
            },
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = (now - last_frame).as_secs_f32().min(0.1);
                last_frame = now;

                let phase = scroll.state();
                if logged_phase != Some(phase) {
                    log::info!("scene phase -> {}", phase.label());
                    logged_phase = Some(phase);
                }

                let aspect = state.width.max(1) as f32 / state.height.max(1) as f32;
                let (world_width, world_height) = world_viewport(aspect);
                let device = DeviceClass::classify(world_width);
                let bounds = FloatBounds::from_viewport(world_width, world_height);
                let pointer_world = pointer_ndc.map(|ndc| {
                    Vec3::new(
                        ndc[0] * bounds.half_width,
                        ndc[1] * bounds.half_height,
                        0.0,
                    )
                });

                composer.update(dt, phase, device, bounds, pointer_world);

                // Mirror the web hover behavior, logging instead of a DOM panel
                if phase == PresentationState::Skills && device == DeviceClass::Wide {
                    if let Some(ndc) = pointer_ndc {
                        let (ro, rd) = ndc_to_ray(ndc, aspect);
                        let targets = composer.pick_targets();
                        let hit = nearest_hit(ro, rd, &targets);
                        if hit != composer.highlight() {
                            composer.set_highlight(hit);
                        }
                    }
                }
                if composer.highlight() != logged_highlight {
                    logged_highlight = composer.highlight();
                    if let Some(skill) = composer.highlighted_skill() {
                        log::info!("highlighted: {} ({})", skill.name, skill.blurb);
                    }
                }

                let instances = composer.compose();
                match state.render(&instances) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}
