use fnv::FnvHashMap;
use raumplaner_core::{MeshKind, Topology};
use wgpu::util::DeviceExt;

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) topology: Topology,
}

/// Unit meshes uploaded once per kind; objects scale them via their model
/// matrix, so dimension changes never touch vertex data.
#[derive(Default)]
pub(crate) struct MeshCache {
    meshes: FnvHashMap<MeshKind, GpuMesh>,
}

impl MeshCache {
    pub(crate) fn ensure(&mut self, device: &wgpu::Device, kind: MeshKind) {
        if self.meshes.contains_key(&kind) {
            return;
        }
        let data = kind.build();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertices"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_indices"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        log::debug!(
            "[render] uploaded {:?}: {} vertices, {} indices",
            kind,
            data.vertices.len(),
            data.indices.len()
        );
        self.meshes.insert(
            kind,
            GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: data.indices.len() as u32,
                topology: data.topology,
            },
        );
    }

    pub(crate) fn get(&self, kind: MeshKind) -> Option<&GpuMesh> {
        self.meshes.get(&kind)
    }

    pub(crate) fn len(&self) -> usize {
        self.meshes.len()
    }
}
