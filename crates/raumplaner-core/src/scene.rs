//! Deterministic `Configuration -> SceneDescription` derivation.
//!
//! The description is a flat list of objects (floor, walls, zoning overlay,
//! furniture) plus lighting and the optional floor texture request. The web
//! renderer uploads it as-is; nothing in here touches the GPU.

use crate::config::{Configuration, FurnitureItem, GrainStyle, MaterialPreset};
use crate::constants::*;
use crate::mesh::MeshKind;
use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallSide {
    /// -Z
    Back,
    /// +Z
    Front,
    /// -X
    Left,
    /// +X
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneSide {
    Back,
    Front,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Floor,
    Wall(WallSide),
    ZoneStrip(ZoneSide),
    Outline,
    Furniture(FurnitureItem),
}

/// Which pipeline draws an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawPass {
    Opaque,
    Translucent,
    Lines,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMaterial {
    /// Linear RGB.
    pub color: [f32; 3],
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    /// Sample the floor texture (white fallback when none is bound).
    pub textured: bool,
    pub unlit: bool,
}

impl SurfaceMaterial {
    fn lit(color: [f32; 3], roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            opacity: 1.0,
            roughness,
            metalness,
            textured: false,
            unlit: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub mesh: MeshKind,
    pub center: Vec3,
    pub size: Vec3,
    pub material: SurfaceMaterial,
    pub pass: DrawPass,
    pub casts_shadow: bool,
    pub receives_shadow: bool,
    pub uv_repeat: [f32; 2],
}

impl SceneObject {
    pub fn transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.size, Quat::IDENTITY, self.center)
    }

    /// Inverse-transpose of the model matrix, for transforming normals.
    pub fn normal_matrix(&self) -> Mat4 {
        self.transform().inverse().transpose()
    }

    /// Geometric extent; planar meshes are flat in Y whatever their scale.
    pub fn extent(&self) -> Vec3 {
        match self.mesh {
            MeshKind::UnitCube => self.size,
            _ => Vec3::new(self.size.x, 0.0, self.size.z),
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.extent() * 0.5
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.extent() * 0.5
    }
}

/// Procedural grain the renderer should rasterize for the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorTextureRequest {
    pub preset: MaterialPreset,
    pub style: GrainStyle,
    pub size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient_intensity: f32,
    pub sun_intensity: f32,
    pub sun_position: Vec3,
    pub sun_target: Vec3,
    /// Linear RGB.
    pub sun_color: [f32; 3],
    pub shadow_map_size: u32,
    pub soft_shadows: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneDescription {
    pub length: f32,
    pub width: f32,
    pub wall_height: f32,
    pub objects: SmallVec<[SceneObject; 16]>,
    pub floor_texture: Option<FloorTextureRequest>,
    pub lighting: Lighting,
    /// Linear RGB clear colour.
    pub background: [f32; 3],
}

impl SceneDescription {
    pub fn from_config(config: &Configuration) -> Self {
        let length = config.apartment_length as f32;
        let width = config.apartment_width as f32;
        let height = config.wall_height as f32;
        let thickness = config.wall_thickness as f32;

        let mut objects: SmallVec<[SceneObject; 16]> = SmallVec::new();
        objects.push(floor(config.material, length, width));
        objects.extend(walls(length, width, height, thickness));
        objects.extend(zoning(length, width));
        for (item, visible) in config.furniture.iter() {
            if visible {
                objects.push(furniture(item, length, width));
            }
        }

        let surface = config.material.surface();
        let floor_texture = surface.grain.map(|style| FloorTextureRequest {
            preset: config.material,
            style,
            size: GRAIN_TEXTURE_SIZE,
        });

        Self {
            length,
            width,
            wall_height: height,
            objects,
            floor_texture,
            lighting: Lighting {
                ambient_intensity: config.ambient_light as f32,
                sun_intensity: config.sun_light as f32,
                sun_position: SUN_POSITION,
                sun_target: Vec3::ZERO,
                sun_color: SUN_COLOR.to_linear(),
                shadow_map_size: SHADOW_MAP_SIZE,
                soft_shadows: true,
            },
            background: BACKGROUND_COLOR.to_linear(),
        }
    }

    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn find(&self, kind: ObjectKind) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.kind == kind)
    }

    pub fn furniture(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects
            .iter()
            .filter(|o| matches!(o.kind, ObjectKind::Furniture(_)))
    }

    pub fn walls(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects
            .iter()
            .filter(|o| matches!(o.kind, ObjectKind::Wall(_)))
    }

    /// Axis-aligned bounds of everything in the scene.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.objects.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), o| (lo.min(o.min()), hi.max(o.max())),
        )
    }
}

fn floor(preset: MaterialPreset, length: f32, width: f32) -> SceneObject {
    let spec = preset.surface();
    let mut material = SurfaceMaterial::lit(spec.color.to_linear(), spec.roughness, spec.metalness);
    material.textured = spec.grain.is_some();
    SceneObject {
        kind: ObjectKind::Floor,
        mesh: MeshKind::FloorGrid(FLOOR_SEGMENTS),
        center: Vec3::ZERO,
        size: Vec3::new(length, 1.0, width),
        material,
        pass: DrawPass::Opaque,
        casts_shadow: false,
        receives_shadow: true,
        uv_repeat: [length / FLOOR_TEXTURE_TILE_M, width / FLOOR_TEXTURE_TILE_M],
    }
}

/// Four slabs whose outer faces sit on the floor boundary. The long walls span
/// the full length; the side walls fit between them.
fn walls(length: f32, width: f32, height: f32, thickness: f32) -> [SceneObject; 4] {
    let half_l = length / 2.0;
    let half_w = width / 2.0;
    let t = thickness.min(half_l).min(half_w);
    let y = height / 2.0;
    let inner_w = (width - 2.0 * t).max(0.0);
    let material = SurfaceMaterial::lit(WALL_COLOR.to_linear(), WALL_ROUGHNESS, WALL_METALNESS);
    let slab = |side, center, size| SceneObject {
        kind: ObjectKind::Wall(side),
        mesh: MeshKind::UnitCube,
        center,
        size,
        material,
        pass: DrawPass::Opaque,
        casts_shadow: true,
        receives_shadow: true,
        uv_repeat: [1.0, 1.0],
    };
    [
        slab(
            WallSide::Back,
            Vec3::new(0.0, y, -half_w + t / 2.0),
            Vec3::new(length, height, t),
        ),
        slab(
            WallSide::Front,
            Vec3::new(0.0, y, half_w - t / 2.0),
            Vec3::new(length, height, t),
        ),
        slab(
            WallSide::Left,
            Vec3::new(-half_l + t / 2.0, y, 0.0),
            Vec3::new(t, height, inner_w),
        ),
        slab(
            WallSide::Right,
            Vec3::new(half_l - t / 2.0, y, 0.0),
            Vec3::new(t, height, inner_w),
        ),
    ]
}

/// Two translucent strips over the front and back thirds plus the boundary
/// outline. Not tied to the selected room.
fn zoning(length: f32, width: f32) -> [SceneObject; 3] {
    let depth = width / 3.0;
    let offset = width / 2.0 - depth / 2.0;
    let strip_material = SurfaceMaterial {
        color: ZONE_COLOR.to_linear(),
        opacity: ZONE_OPACITY,
        roughness: 1.0,
        metalness: 0.0,
        textured: false,
        unlit: false,
    };
    let strip = |side, z| SceneObject {
        kind: ObjectKind::ZoneStrip(side),
        mesh: MeshKind::UnitQuad,
        center: Vec3::new(0.0, ZONE_LIFT, z),
        size: Vec3::new(length, 1.0, depth),
        material: strip_material,
        pass: DrawPass::Translucent,
        casts_shadow: false,
        receives_shadow: true,
        uv_repeat: [1.0, 1.0],
    };
    let outline = SceneObject {
        kind: ObjectKind::Outline,
        mesh: MeshKind::UnitOutline,
        center: Vec3::new(0.0, OUTLINE_LIFT, 0.0),
        size: Vec3::new(length, 1.0, width),
        material: SurfaceMaterial {
            color: OUTLINE_COLOR.to_linear(),
            opacity: 1.0,
            roughness: 1.0,
            metalness: 0.0,
            textured: false,
            unlit: true,
        },
        pass: DrawPass::Lines,
        casts_shadow: false,
        receives_shadow: false,
        uv_repeat: [1.0, 1.0],
    };
    [
        strip(ZoneSide::Back, -offset),
        strip(ZoneSide::Front, offset),
        outline,
    ]
}

/// Footprint and anchor of a furniture block for the given apartment size.
pub fn furniture_placement(item: FurnitureItem, length: f32, width: f32) -> (Vec3, Vec3) {
    let half_l = length / 2.0;
    let half_w = width / 2.0;
    let y = FURNITURE_BASE_Y;
    match item {
        FurnitureItem::Sofa => (
            Vec3::new(-half_l / 2.0, y, half_w - 1.5),
            Vec3::new(2.4, 0.8, 1.0),
        ),
        FurnitureItem::DiningTable => (Vec3::new(0.0, y + 0.2, 0.0), Vec3::new(1.8, 0.75, 1.0)),
        FurnitureItem::KitchenIsland => (
            Vec3::new(half_l - 2.0, y + 0.4, half_w - 1.5),
            Vec3::new(1.6, 0.9, 0.9),
        ),
        FurnitureItem::Bed => (
            Vec3::new(-half_l + 2.0, y, -half_w + 2.0),
            Vec3::new(2.2, 0.75, 1.8),
        ),
        FurnitureItem::Desk => (
            Vec3::new(half_l - 1.8, y, -half_w + 1.2),
            Vec3::new(1.4, 0.75, 0.6),
        ),
    }
}

fn furniture(item: FurnitureItem, length: f32, width: f32) -> SceneObject {
    let (center, size) = furniture_placement(item, length, width);
    SceneObject {
        kind: ObjectKind::Furniture(item),
        mesh: MeshKind::UnitCube,
        center,
        size,
        material: SurfaceMaterial::lit(
            FURNITURE_COLOR.to_linear(),
            FURNITURE_ROUGHNESS,
            FURNITURE_METALNESS,
        ),
        pass: DrawPass::Opaque,
        casts_shadow: true,
        receives_shadow: true,
        uv_repeat: [1.0, 1.0],
    }
}
