// GPU uniform layouts mirrored by scene.wgsl / post.wgsl, and their packing
// from the scene description. Pure; host tests include this file.

use glam::{Mat4, Vec3};
use raumplaner_core::constants::{ENVIRONMENT_INTENSITY, SHADOW_DEPTH_BIAS, SHADOW_SOFTNESS_TEXELS};
use raumplaner_core::{Camera, SceneDescription, SceneObject};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub light_view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub sun_dir: [f32; 4],
    pub sun_color: [f32; 4],
    pub ambient: [f32; 4],
    pub shadow: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub surface: [f32; 4],
    pub uv_repeat: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PostUniforms {
    pub exposure: f32,
    pub encode_srgb: f32,
    pub _pad: [f32; 2],
}

#[inline]
fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

pub fn scene_uniforms(scene: &SceneDescription, camera: &Camera, light_view_proj: Mat4) -> SceneUniforms {
    let l = &scene.lighting;
    let to_sun = (l.sun_position - l.sun_target).try_normalize().unwrap_or(Vec3::Y);
    let texel = 1.0 / l.shadow_map_size.max(1) as f32;
    SceneUniforms {
        view_proj: camera.view_projection().to_cols_array_2d(),
        light_view_proj: light_view_proj.to_cols_array_2d(),
        camera_pos: camera.eye.extend(1.0).to_array(),
        sun_dir: to_sun.extend(l.sun_intensity).to_array(),
        sun_color: [l.sun_color[0], l.sun_color[1], l.sun_color[2], 1.0],
        ambient: [l.ambient_intensity, ENVIRONMENT_INTENSITY, 0.0, 0.0],
        shadow: [
            texel,
            SHADOW_DEPTH_BIAS,
            if l.soft_shadows { SHADOW_SOFTNESS_TEXELS } else { 0.0 },
            flag(l.shadow_map_size > 0),
        ],
    }
}

pub fn object_uniforms(obj: &SceneObject) -> ObjectUniforms {
    let m = &obj.material;
    ObjectUniforms {
        model: obj.transform().to_cols_array_2d(),
        normal_matrix: obj.normal_matrix().to_cols_array_2d(),
        color: [m.color[0], m.color[1], m.color[2], m.opacity],
        surface: [
            m.roughness,
            m.metalness,
            flag(m.unlit),
            flag(obj.receives_shadow),
        ],
        uv_repeat: [obj.uv_repeat[0], obj.uv_repeat[1], flag(m.textured), 0.0],
    }
}

pub fn post_uniforms(exposure: f32, surface_is_srgb: bool) -> PostUniforms {
    PostUniforms {
        exposure,
        encode_srgb: flag(!surface_is_srgb),
        _pad: [0.0; 2],
    }
}
