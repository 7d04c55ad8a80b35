use raumplaner_core::{FloorTextureRequest, GrainTexture, MaterialPreset};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Floor albedo binding (group 2). Holds either the grain texture of the
/// current preset or a 1×1 white texture, and swaps only when the preset
/// changes.
pub(crate) struct FloorTexture {
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
    _white_tex: wgpu::Texture,
    white: wgpu::TextureView,
    grain: Option<wgpu::Texture>,
    key: Option<Option<MaterialPreset>>,
}

impl FloorTexture {
    pub(crate) fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("albedo_bgl"),
            entries: &[
                super::helpers::texture_entry(
                    0,
                    wgpu::TextureSampleType::Float { filterable: true },
                ),
                super::helpers::sampler_entry(1, wgpu::SamplerBindingType::Filtering),
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("albedo_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let white_tex = upload_rgba(device, queue, "albedo_white", 1, &[255, 255, 255, 255]);
        let white = white_tex.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = make_bind_group(device, &bgl, &white, &sampler);
        Self {
            bgl,
            bind_group,
            sampler,
            _white_tex: white_tex,
            white,
            grain: None,
            key: None,
        }
    }

    pub(crate) fn has_grain(&self) -> bool {
        self.grain.is_some()
    }

    /// Bring the binding in line with `request`. Returns true if it changed.
    pub(crate) fn sync(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        request: Option<&FloorTextureRequest>,
    ) -> bool {
        let key = request.map(|r| r.preset);
        if self.key == Some(key) {
            return false;
        }
        self.key = Some(key);

        if let Some(old) = self.grain.take() {
            old.destroy();
        }

        let max_dim = device.limits().max_texture_dimension_2d;
        let grain = request
            .filter(|r| {
                let fits = r.size <= max_dim;
                if !fits {
                    log::warn!(
                        "[render] grain texture {}px exceeds device limit {}px; flat shading",
                        r.size,
                        max_dim
                    );
                }
                fits
            })
            .and_then(|r| GrainTexture::generate(r, &mut StdRng::from_entropy()));

        let view = match grain {
            Some(g) => {
                let tex = upload_rgba(device, queue, "albedo_grain", g.size, &g.pixels);
                let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
                log::info!("[render] floor grain {}px for {:?}", g.size, key);
                self.grain = Some(tex);
                view
            }
            None => {
                log::info!("[render] floor without texture for {:?}", key);
                self.white.clone()
            }
        };
        self.bind_group = make_bind_group(device, &self.bgl, &view, &self.sampler);
        true
    }
}

fn make_bind_group(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("bg_albedo"),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    size: u32,
    pixels: &[u8],
) -> wgpu::Texture {
    let extent = wgpu::Extent3d {
        width: size,
        height: size,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(size * 4),
            rows_per_image: Some(size),
        },
        extent,
    );
    texture
}
