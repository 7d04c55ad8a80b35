// Host-side tests for the unit meshes the scene is built from.

use glam::Vec3;
use raumplaner_core::*;

fn pos(v: &Vertex) -> Vec3 {
    Vec3::from_array(v.position)
}

/// Every triangle winds counter-clockwise around its vertex normal.
fn assert_outward(mesh: &MeshData) {
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| &mesh.vertices[i as usize]);
        let face = (pos(b) - pos(a)).cross(pos(c) - pos(a));
        assert!(face.dot(Vec3::from_array(a.normal)) > 0.0);
    }
}

#[test]
fn unit_cube_is_centred_with_outward_faces() {
    let mesh = MeshKind::UnitCube.build();
    assert_eq!(mesh.topology, Topology::Triangles);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for v in &mesh.vertices {
        assert!(v.position.iter().all(|c| c.abs() == 0.5));
        // the vertex lies on the face its normal points out of
        assert!((pos(v).dot(Vec3::from_array(v.normal)) - 0.5).abs() < 1e-6);
    }
    assert_outward(&mesh);
}

#[test]
fn floor_grid_is_subdivided_and_faces_up() {
    let mesh = MeshKind::FloorGrid(32).build();
    assert_eq!(mesh.vertices.len(), 33 * 33);
    assert_eq!(mesh.indices.len(), 32 * 32 * 6);
    assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    assert!(mesh.vertices.iter().all(|v| v.position[1] == 0.0));
    assert_outward(&mesh);
    let max_uv = mesh
        .vertices
        .iter()
        .fold(0.0f32, |m, v| m.max(v.uv[0]).max(v.uv[1]));
    assert_eq!(max_uv, 1.0);
}

#[test]
fn zero_segment_grid_falls_back_to_one_quad() {
    assert_eq!(MeshKind::FloorGrid(0).build(), MeshKind::UnitQuad.build());
    assert_eq!(MeshKind::UnitQuad.build().indices.len(), 6);
}

#[test]
fn outline_is_a_closed_line_list() {
    let mesh = MeshKind::UnitOutline.build();
    assert_eq!(mesh.topology, Topology::Lines);
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.indices, vec![0, 1, 1, 2, 2, 3, 3, 0]);
}

#[test]
fn indices_stay_in_bounds() {
    for kind in [
        MeshKind::UnitCube,
        MeshKind::FloorGrid(32),
        MeshKind::UnitQuad,
        MeshKind::UnitOutline,
    ] {
        let mesh = kind.build();
        assert!(mesh
            .indices
            .iter()
            .all(|&i| (i as usize) < mesh.vertices.len()));
    }
}

#[test]
fn model_matrix_scales_unit_mesh_to_object_size() {
    let scene = SceneDescription::from_config(&Configuration::default());
    let wall = scene.find(ObjectKind::Wall(WallSide::Front)).expect("wall");
    let m = wall.transform();
    let corner = m.transform_point3(Vec3::splat(0.5));
    assert!((corner - wall.max()).length() < 1e-4);
}
