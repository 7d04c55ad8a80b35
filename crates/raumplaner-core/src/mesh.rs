//! CPU-side geometry for the handful of shapes the scene is made of.
//!
//! All meshes are unit sized and centred on the origin; per-object transforms
//! scale them to the configured dimensions. That keeps vertex buffers stable
//! across slider drags; only uniforms change.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// 1×1×1 box.
    UnitCube,
    /// 1×1 plane in XZ facing +Y, subdivided `n`×`n`.
    FloorGrid(u32),
    /// 1×1 plane in XZ facing +Y.
    UnitQuad,
    /// Boundary of the 1×1 XZ square as a line list.
    UnitOutline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    Lines,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl MeshKind {
    pub fn build(self) -> MeshData {
        match self {
            MeshKind::UnitCube => unit_cube(),
            MeshKind::FloorGrid(n) => plane_grid(n.max(1)),
            MeshKind::UnitQuad => plane_grid(1),
            MeshKind::UnitOutline => unit_outline(),
        }
    }
}

fn unit_cube() -> MeshData {
    // (normal, u axis, v axis) with u × v == normal so quads wind CCW
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let base = vertices.len() as u32;
        for (su, sv) in corners {
            let p = n * 0.5 + u * (0.5 * su) + v * (0.5 * sv);
            vertices.push(Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: [(su + 1.0) * 0.5, (sv + 1.0) * 0.5],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData {
        vertices,
        indices,
        topology: Topology::Triangles,
    }
}

fn plane_grid(segments: u32) -> MeshData {
    let n = segments;
    let row = n + 1;
    let mut vertices = Vec::with_capacity((row * row) as usize);
    for iz in 0..=n {
        for ix in 0..=n {
            let u = ix as f32 / n as f32;
            let v = iz as f32 / n as f32;
            vertices.push(Vertex {
                position: [u - 0.5, 0.0, v - 0.5],
                normal: [0.0, 1.0, 0.0],
                uv: [u, v],
            });
        }
    }
    let mut indices = Vec::with_capacity((n * n * 6) as usize);
    for iz in 0..n {
        for ix in 0..n {
            let p00 = iz * row + ix;
            let p10 = p00 + 1;
            let p01 = p00 + row;
            let p11 = p01 + 1;
            indices.extend_from_slice(&[p00, p01, p10, p10, p01, p11]);
        }
    }
    MeshData {
        vertices,
        indices,
        topology: Topology::Triangles,
    }
}

fn unit_outline() -> MeshData {
    let corners = [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]];
    let vertices = corners
        .iter()
        .map(|[x, z]| Vertex {
            position: [*x, 0.0, *z],
            normal: [0.0, 1.0, 0.0],
            uv: [x + 0.5, z + 0.5],
        })
        .collect();
    MeshData {
        vertices,
        indices: vec![0, 1, 1, 2, 2, 3, 3, 0],
        topology: Topology::Lines,
    }
}
