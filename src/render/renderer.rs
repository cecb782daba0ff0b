use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use bytemuck::bytes_of;
use image::RgbaImage;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowId};

use crate::camera::Camera;
use crate::geometry::{
    cube_vertices, quad_vertices, skybox_vertices, QuadVertex, SkyVertex, Vertex,
    QUAD_VERTEX_COUNT, SKYBOX_VERTEX_COUNT,
};
use crate::lighting::{LightRig, MATERIAL_SHININESS};
use crate::obj::ObjMesh;
use crate::scene::{Scene, ShaderKind};

use super::sequencer::{FramePlan, RenderTarget, TwoPassSequencer};
use super::shaders::{LAMP_SHADER, MULTI_LIGHT_SHADER, POST_SHADER, SKYBOX_SHADER};
use super::targets::{DepthBuffer, OffscreenTarget};
use super::texture::Texture;
use super::uniforms::{GlobalUniform, LightsUniform, ObjectUniform, SkyboxUniform};

/// GPU renderer that draws the lit scene, the skybox, and the optional
/// greyscale post pass.
pub struct Renderer {
    window: Arc<Window>,
    surface: wgpu::Surface,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthBuffer,
    offscreen: OffscreenTarget,
    sequencer: TwoPassSequencer,
    post_enabled: bool,

    multi_light_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    skybox_pipeline: wgpu::RenderPipeline,
    post_pipeline: wgpu::RenderPipeline,

    global_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    skybox_buffer: wgpu::Buffer,
    global_bind_group: wgpu::BindGroup,
    material_bind_group: wgpu::BindGroup,
    skybox_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    post_layout: wgpu::BindGroupLayout,
    post_bind_group: wgpu::BindGroup,
    post_sampler: wgpu::Sampler,

    cube_buffer: wgpu::Buffer,
    skybox_vertex_buffer: wgpu::Buffer,
    quad_buffer: wgpu::Buffer,
    model: Option<ModelBuffers>,
}

impl Renderer {
    /// Initializes the GPU renderer for the provided window and decoded
    /// assets.
    pub async fn new(
        window: Arc<Window>,
        diffuse: &RgbaImage,
        skybox_faces: &[RgbaImage; 6],
        model: Option<&ObjMesh>,
    ) -> Result<Self> {
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(anyhow!("window has zero area"));
        }

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        // SAFETY: the window is stored in the renderer and outlives the
        // surface.
        let surface = unsafe { instance.create_surface(window.as_ref()) }?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to acquire GPU adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("renderer-device"),
                    features: wgpu::Features::empty(),
                    limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("failed to create GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|format| format.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            // The presentation step doubles as the frame pacing wait.
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let depth = DepthBuffer::create(&device, config.width, config.height);
        let offscreen = OffscreenTarget::create(&device, surface_format, size.width, size.height)
            .context("failed to create the offscreen color target")?;

        let diffuse_texture = Texture::from_image(&device, &queue, diffuse, "diffuse-map");
        let skybox_texture =
            Texture::cubemap_from_images(&device, &queue, skybox_faces, "skybox-cubemap");

        let global_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("global-bind-layout"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT, GlobalUniform::SIZE),
                uniform_entry(1, wgpu::ShaderStages::FRAGMENT, LightsUniform::SIZE),
            ],
        });
        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("material-bind-layout"),
            entries: &[
                texture_entry(0, wgpu::TextureViewDimension::D2),
                sampler_entry(1),
            ],
        });
        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object-bind-layout"),
            entries: &[uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX,
                ObjectUniform::SIZE,
            )],
        });
        let skybox_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("skybox-bind-layout"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX, SkyboxUniform::SIZE),
                texture_entry(1, wgpu::TextureViewDimension::Cube),
                sampler_entry(2),
            ],
        });
        let post_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post-bind-layout"),
            entries: &[
                texture_entry(0, wgpu::TextureViewDimension::D2),
                sampler_entry(1),
            ],
        });

        let global_buffer = create_uniform_buffer(&device, "global-uniform", GlobalUniform::SIZE);
        let lights_buffer = create_uniform_buffer(&device, "lights-uniform", LightsUniform::SIZE);
        let skybox_buffer = create_uniform_buffer(&device, "skybox-uniform", SkyboxUniform::SIZE);

        let global_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("global-bind-group"),
            layout: &global_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: global_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights_buffer.as_entire_binding(),
                },
            ],
        });
        let material_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("material-bind-group"),
            layout: &material_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse_texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&diffuse_texture.sampler),
                },
            ],
        });
        let skybox_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skybox-bind-group"),
            layout: &skybox_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: skybox_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&skybox_texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&skybox_texture.sampler),
                },
            ],
        });

        let post_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("post-sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post_bind_group =
            create_post_bind_group(&device, &post_layout, &offscreen, &post_sampler);

        let multi_light_pipeline = create_pipeline(
            &device,
            "multi-light-pipeline",
            MULTI_LIGHT_SHADER,
            &[&global_layout, &material_layout, &object_layout],
            Vertex::layout(),
            surface_format,
            Some(scene_depth_state()),
        );
        let lamp_pipeline = create_pipeline(
            &device,
            "lamp-pipeline",
            LAMP_SHADER,
            &[&global_layout, &object_layout],
            Vertex::layout(),
            surface_format,
            Some(scene_depth_state()),
        );
        // LessEqual so the skybox passes at maximum depth; drawn last among
        // the opaque passes.
        let skybox_pipeline = create_pipeline(
            &device,
            "skybox-pipeline",
            SKYBOX_SHADER,
            &[&skybox_layout],
            SkyVertex::layout(),
            surface_format,
            Some(wgpu::DepthStencilState {
                format: DepthBuffer::FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: Default::default(),
                bias: Default::default(),
            }),
        );
        let post_pipeline = create_pipeline(
            &device,
            "post-pipeline",
            POST_SHADER,
            &[&post_layout],
            QuadVertex::layout(),
            surface_format,
            None,
        );

        let cube_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube-vertices"),
            contents: bytemuck::cast_slice(&cube_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let skybox_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("skybox-vertices"),
            contents: bytemuck::cast_slice(&skybox_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("post-quad-vertices"),
            contents: bytemuck::cast_slice(&quad_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let model = model.map(|mesh| ModelBuffers::from_mesh(&device, mesh, "scene-model"));

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            depth,
            offscreen,
            sequencer: TwoPassSequencer::new(),
            post_enabled: false,
            multi_light_pipeline,
            lamp_pipeline,
            skybox_pipeline,
            post_pipeline,
            global_buffer,
            lights_buffer,
            skybox_buffer,
            global_bind_group,
            material_bind_group,
            skybox_bind_group,
            object_layout,
            post_layout,
            post_bind_group,
            post_sampler,
            cube_buffer,
            skybox_vertex_buffer,
            quad_buffer,
            model,
        })
    }

    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn aspect(&self) -> f32 {
        if self.config.height == 0 {
            1.0
        } else {
            self.config.width as f32 / self.config.height as f32
        }
    }

    pub fn post_enabled(&self) -> bool {
        self.post_enabled
    }

    /// Enables or disables the greyscale pass. Enabling restarts the pass
    /// sequence so a stale offscreen image is never presented.
    pub fn set_post_enabled(&mut self, enabled: bool) {
        if enabled && !self.post_enabled {
            self.sequencer.reset();
        }
        self.post_enabled = enabled;
    }

    /// Resizes the swap chain and the render targets that track it.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) -> Result<()> {
        if new_size.width == 0 || new_size.height == 0 {
            return Ok(());
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth = DepthBuffer::create(&self.device, new_size.width, new_size.height);
        self.offscreen = OffscreenTarget::create(
            &self.device,
            self.config.format,
            new_size.width,
            new_size.height,
        )?;
        self.post_bind_group = create_post_bind_group(
            &self.device,
            &self.post_layout,
            &self.offscreen,
            &self.post_sampler,
        );
        self.sequencer.reset();
        Ok(())
    }

    /// Rewrites the camera, lighting, and skybox uniforms. Must run every
    /// frame before the draws that depend on them; uniform values are never
    /// assumed to survive from a previous frame.
    pub fn update_globals(&self, camera: &Camera, lights: &LightRig) {
        let view = camera.view_matrix();
        let proj = camera.projection(self.aspect());
        self.queue.write_buffer(
            &self.global_buffer,
            0,
            bytes_of(&GlobalUniform::new(view, proj, camera.position())),
        );
        self.queue.write_buffer(
            &self.lights_buffer,
            0,
            bytes_of(&LightsUniform::pack(lights, MATERIAL_SHININESS)),
        );
        self.queue
            .write_buffer(&self.skybox_buffer, 0, bytes_of(&SkyboxUniform::new(view, proj)));
    }

    /// Processes one frame according to the pass plan: either a direct
    /// scene render, the offscreen half of the greyscale effect, or the
    /// presenting post pass.
    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let plan = if self.post_enabled {
            self.sequencer.plan()
        } else {
            FramePlan::direct()
        };

        match plan.target {
            RenderTarget::Offscreen => {
                self.render_scene(&self.offscreen.view, scene);
                Ok(())
            }
            RenderTarget::Surface => {
                let output = self.surface.get_current_texture()?;
                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                if self.post_enabled {
                    self.render_post(&view);
                } else {
                    self.render_scene(&view, scene);
                }
                debug_assert!(plan.present);
                output.present();
                Ok(())
            }
        }
    }

    /// Draws the full opaque scene: lit geometry, lamp markers, skybox last.
    fn render_scene(&self, color_view: &wgpu::TextureView, scene: &Scene) {
        let draw_list = scene.draw_list();

        // Per-object bind groups must outlive the render pass, so build them
        // all up front.
        let object_groups: Vec<(ShaderKind, wgpu::BindGroup)> = draw_list
            .iter()
            .map(|cmd| (cmd.shader, self.object_bind_group(ObjectUniform::new(cmd.model))))
            .collect();
        let model_group = scene.model.as_ref().map(|instance| {
            self.object_bind_group(ObjectUniform::new(instance.transform.model_matrix()))
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene-encoder"),
            });
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: true,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: true,
                }),
                stencil_ops: None,
            }),
        });

        pass.set_pipeline(&self.multi_light_pipeline);
        pass.set_bind_group(0, &self.global_bind_group, &[]);
        pass.set_bind_group(1, &self.material_bind_group, &[]);
        pass.set_vertex_buffer(0, self.cube_buffer.slice(..));
        for (cmd, (shader, group)) in draw_list.iter().zip(&object_groups) {
            if *shader != ShaderKind::MultiLight {
                continue;
            }
            pass.set_bind_group(2, group, &[]);
            pass.draw(0..cmd.vertex_count, 0..1);
        }

        if let (Some(model), Some(group)) = (&self.model, &model_group) {
            pass.set_bind_group(2, group, &[]);
            pass.set_vertex_buffer(0, model.vertex.slice(..));
            pass.set_index_buffer(model.index.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..model.index_count, 0, 0..1);
        }

        pass.set_pipeline(&self.lamp_pipeline);
        pass.set_bind_group(0, &self.global_bind_group, &[]);
        pass.set_vertex_buffer(0, self.cube_buffer.slice(..));
        for (cmd, (shader, group)) in draw_list.iter().zip(&object_groups) {
            if *shader != ShaderKind::Lamp {
                continue;
            }
            pass.set_bind_group(1, group, &[]);
            pass.draw(0..cmd.vertex_count, 0..1);
        }

        pass.set_pipeline(&self.skybox_pipeline);
        pass.set_bind_group(0, &self.skybox_bind_group, &[]);
        pass.set_vertex_buffer(0, self.skybox_vertex_buffer.slice(..));
        pass.draw(0..SKYBOX_VERTEX_COUNT, 0..1);

        drop(pass);
        self.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Draws the offscreen color texture to the surface through the
    /// greyscale shader. Depth testing is not used for the screen quad.
    fn render_post(&self, surface_view: &wgpu::TextureView) {
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("post-encoder"),
            });
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("post-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: surface_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: true,
                },
            })],
            depth_stencil_attachment: None,
        });

        pass.set_pipeline(&self.post_pipeline);
        pass.set_bind_group(0, &self.post_bind_group, &[]);
        pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
        pass.draw(0..QUAD_VERTEX_COUNT, 0..1);

        drop(pass);
        self.queue.submit(std::iter::once(encoder.finish()));
    }

    fn object_bind_group(&self, uniform: ObjectUniform) -> wgpu::BindGroup {
        let buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("object-uniform"),
                contents: bytes_of(&uniform),
                usage: wgpu::BufferUsages::UNIFORM,
            });
        self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object-bind-group"),
            layout: &self.object_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        })
    }
}

struct ModelBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

impl ModelBuffers {
    fn from_mesh(device: &wgpu::Device, mesh: &ObjMesh, label: &str) -> Self {
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-vertices")),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-indices")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex,
            index,
            index_count: mesh.index_count(),
        }
    }
}

trait UniformSize {
    const SIZE: u64;
}

macro_rules! uniform_size {
    ($($ty:ty),*) => {
        $(impl UniformSize for $ty {
            const SIZE: u64 = std::mem::size_of::<$ty>() as u64;
        })*
    };
}

uniform_size!(GlobalUniform, LightsUniform, ObjectUniform, SkyboxUniform);

fn uniform_entry(
    binding: u32,
    visibility: wgpu::ShaderStages,
    min_size: u64,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: std::num::NonZeroU64::new(min_size),
        },
        count: None,
    }
}

fn texture_entry(binding: u32, dimension: wgpu::TextureViewDimension) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: dimension,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn create_uniform_buffer(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_post_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    offscreen: &OffscreenTarget,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("post-bind-group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&offscreen.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn scene_depth_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DepthBuffer::FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: Default::default(),
        bias: Default::default(),
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    shader_source: &str,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    vertex_layout: wgpu::VertexBufferLayout<'_>,
    format: wgpu::TextureFormat,
    depth_stencil: Option<wgpu::DepthStencilState>,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(shader_source.into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts,
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: "vs_main",
            buffers: &[vertex_layout],
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            ..Default::default()
        },
        depth_stencil,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        multiview: None,
    })
}
