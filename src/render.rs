use crate::constants::{HDR_EXPOSURE, MAX_SCENE_OBJECTS, UNIFORM_STRIDE};
use raumplaner_core::{light_view_projection, Camera, DrawPass, MeshKind, SceneDescription, Topology};
use smallvec::SmallVec;
use web_sys as web;

mod floor_texture;
mod helpers;
mod meshes;
mod post;
mod shadow;
mod targets;
pub mod uniforms;

use floor_texture::FloorTexture;
use meshes::MeshCache;
use targets::RenderTargets;
use uniforms::{object_uniforms, scene_uniforms, ObjectUniforms, SceneUniforms};

#[derive(Clone, Copy, Debug)]
struct DrawItem {
    mesh: MeshKind,
    slot: u32,
    pass: DrawPass,
    casts_shadow: bool,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    surface_is_srgb: bool,

    targets: RenderTargets,
    post: post::PostResources,
    bg_hdr: wgpu::BindGroup,

    shadow: shadow::ShadowResources,
    bg_shadow_scene: wgpu::BindGroup,

    scene_buffer: wgpu::Buffer,
    bg_scene: wgpu::BindGroup,
    object_buffer: wgpu::Buffer,
    bg_objects: wgpu::BindGroup,
    floor: FloorTexture,
    meshes: MeshCache,

    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,

    scene: Option<SceneDescription>,
    draws: SmallVec<[DrawItem; MAX_SCENE_OBJECTS]>,
    light_view_proj: glam::Mat4,
    shadow_dirty: bool,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let first_format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(first_format);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[render] surface {}x{} {:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(raumplaner_core::SCENE_WGSL.into()),
        });
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(raumplaner_core::POST_WGSL.into()),
        });

        let post = post::create_post_resources(&device, &post_shader, format);
        let bg_hdr = post::hdr_bind_group(&device, &post, &targets.hdr_view);

        let scene_size = std::mem::size_of::<SceneUniforms>() as u64;
        let object_size = std::mem::size_of::<ObjectUniforms>() as u64;

        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
                true,
                Some(object_size),
            )],
        });
        let object_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("object_uniforms"),
            size: UNIFORM_STRIDE * MAX_SCENE_OBJECTS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bg_objects = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_objects"),
            layout: &object_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &object_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(object_size),
                }),
            }],
        });

        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: scene_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let shadow = shadow::create_shadow_resources(
            &device,
            &scene_shader,
            &object_bgl,
            scene_size,
            raumplaner_core::constants::SHADOW_MAP_SIZE,
        );
        let bg_shadow_scene = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_shadow_scene"),
            layout: &shadow.scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT, false, Some(scene_size)),
                helpers::texture_entry(1, wgpu::TextureSampleType::Depth),
                helpers::sampler_entry(2, wgpu::SamplerBindingType::Comparison),
            ],
        });
        let bg_scene = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_scene"),
            layout: &scene_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&shadow.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&shadow.sampler),
                },
            ],
        });

        let floor = FloorTexture::new(&device, &queue);

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_scene"),
            bind_group_layouts: &[&scene_bgl, &object_bgl, &floor.bgl],
            push_constant_ranges: &[],
        });
        let opaque_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &scene_shader,
            helpers::HDR_FORMAT,
            helpers::SceneStyle {
                label: "opaque_pipeline",
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                blend: Some(wgpu::BlendState::REPLACE),
                depth_write: true,
            },
        );
        let translucent_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &scene_shader,
            helpers::HDR_FORMAT,
            helpers::SceneStyle {
                label: "translucent_pipeline",
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );
        let line_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &scene_shader,
            helpers::HDR_FORMAT,
            helpers::SceneStyle {
                label: "line_pipeline",
                topology: wgpu::PrimitiveTopology::LineList,
                cull_mode: None,
                blend: Some(wgpu::BlendState::REPLACE),
                depth_write: true,
            },
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            surface_is_srgb: format.is_srgb(),
            targets,
            post,
            bg_hdr,
            shadow,
            bg_shadow_scene,
            scene_buffer,
            bg_scene,
            object_buffer,
            bg_objects,
            floor,
            meshes: MeshCache::default(),
            opaque_pipeline,
            translucent_pipeline,
            line_pipeline,
            scene: None,
            draws: SmallVec::new(),
            light_view_proj: glam::Mat4::IDENTITY,
            shadow_dirty: true,
            clear_color: wgpu::Color::BLACK,
            width,
            height,
        })
    }

    /// Upload a new scene description. Geometry is shared per mesh kind; only
    /// per-object uniforms and, when the preset changed, the floor texture are
    /// rewritten.
    pub fn set_scene(&mut self, scene: SceneDescription) {
        self.draws.clear();
        for (i, obj) in scene.objects().enumerate() {
            if i >= MAX_SCENE_OBJECTS {
                log::warn!(
                    "[render] scene has {} objects; drawing the first {}",
                    scene.objects.len(),
                    MAX_SCENE_OBJECTS
                );
                break;
            }
            self.meshes.ensure(&self.device, obj.mesh);
            let u = object_uniforms(obj);
            self.queue.write_buffer(
                &self.object_buffer,
                i as u64 * UNIFORM_STRIDE,
                bytemuck::bytes_of(&u),
            );
            self.draws.push(DrawItem {
                mesh: obj.mesh,
                slot: i as u32,
                pass: obj.pass,
                casts_shadow: obj.casts_shadow,
            });
        }

        if self
            .floor
            .sync(&self.device, &self.queue, scene.floor_texture.as_ref())
        {
            log::debug!("[render] floor texture swapped (grain: {})", self.floor.has_grain());
        }

        self.light_view_proj = light_view_projection(&scene.lighting, scene.bounds());
        let [r, g, b] = scene.background;
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };
        self.shadow_dirty = true;
        log::debug!(
            "[render] scene synced: {} draws, {} meshes cached",
            self.draws.len(),
            self.meshes.len()
        );
        self.scene = Some(scene);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface and size-dependent targets, e.g. after the
    /// surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
        self.bg_hdr = post::hdr_bind_group(&self.device, &self.post, &self.targets.hdr_view);
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn render(&mut self, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let Some(scene) = &self.scene else {
            return Ok(());
        };
        let su = scene_uniforms(scene, camera, self.light_view_proj);
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&su));
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            HDR_EXPOSURE,
            self.surface_is_srgb,
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: shadow map (only when the scene moved)
        if self.shadow_dirty {
            let mut spass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shadow_pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            spass.set_pipeline(&self.shadow.pipeline);
            spass.set_bind_group(0, &self.bg_shadow_scene, &[]);
            for d in self.draws.iter().filter(|d| d.casts_shadow) {
                self.draw_item(&mut spass, d);
            }
            drop(spass);
            self.shadow_dirty = false;
            log::debug!("[render] shadow map {}px redrawn", self.shadow.size);
        }

        // Pass 2: lit scene into HDR
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bg_scene, &[]);
            rpass.set_bind_group(2, &self.floor.bind_group, &[]);
            for (pass, pipeline) in [
                (DrawPass::Opaque, &self.opaque_pipeline),
                (DrawPass::Translucent, &self.translucent_pipeline),
                (DrawPass::Lines, &self.line_pipeline),
            ] {
                rpass.set_pipeline(pipeline);
                for d in self.draws.iter().filter(|d| d.pass == pass) {
                    self.draw_item(&mut rpass, d);
                }
            }
        }

        // Pass 3: tone map to the swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            &self.post.composite_pipeline,
            &self.bg_hdr,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn draw_item(&self, pass: &mut wgpu::RenderPass<'_>, d: &DrawItem) {
        let Some(mesh) = self.meshes.get(d.mesh) else {
            return;
        };
        let wants_lines = d.pass == DrawPass::Lines;
        if wants_lines != (mesh.topology == Topology::Lines) {
            return;
        }
        pass.set_bind_group(1, &self.bg_objects, &[d.slot * UNIFORM_STRIDE as u32]);
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
