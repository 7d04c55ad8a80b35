// Host-side tests for GPU uniform packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod uniforms {
    include!("../src/render/uniforms.rs");
}

use constants::*;
use raumplaner_core::*;
use std::mem::size_of;
use uniforms::*;

#[test]
fn layouts_match_the_shaders() {
    assert_eq!(size_of::<SceneUniforms>(), 208);
    assert_eq!(size_of::<ObjectUniforms>(), 176);
    assert_eq!(size_of::<PostUniforms>(), 16);
    assert!(size_of::<ObjectUniforms>() as u64 <= UNIFORM_STRIDE);
}

#[test]
fn floor_texture_flag_follows_material() {
    let mut store = ConfigStore::default();
    let floor = |store: &ConfigStore| {
        let scene = SceneDescription::from_config(store.config());
        object_uniforms(scene.find(ObjectKind::Floor).expect("floor"))
    };
    assert_eq!(floor(&store).uv_repeat[2], 1.0);
    assert_eq!(floor(&store).uv_repeat[0], 6.0);
    store.set_material(MaterialPreset::Concrete);
    assert_eq!(floor(&store).uv_repeat[2], 0.0);
}

#[test]
fn outline_is_unlit_and_strips_are_translucent() {
    let scene = SceneDescription::from_config(&Configuration::default());
    let outline = object_uniforms(scene.find(ObjectKind::Outline).expect("outline"));
    assert_eq!(outline.surface[2], 1.0);
    assert_eq!(outline.surface[3], 0.0);
    let strip = object_uniforms(scene.find(ObjectKind::ZoneStrip(ZoneSide::Front)).expect("strip"));
    assert!(strip.color[3] < 0.1);
}

#[test]
fn scene_uniforms_carry_lighting() {
    let mut store = ConfigStore::default();
    store.set_light(LightChannel::Sun, 1.5);
    store.set_light(LightChannel::Ambient, 0.6);
    let scene = SceneDescription::from_config(store.config());
    let camera = Camera::apartment_default(1.5);
    let u = scene_uniforms(&scene, &camera, glam::Mat4::IDENTITY);

    assert_eq!(u.sun_dir[3], 1.5);
    let dir = glam::Vec3::new(u.sun_dir[0], u.sun_dir[1], u.sun_dir[2]);
    assert!((dir.length() - 1.0).abs() < 1e-5);
    assert!(dir.y > 0.0);
    assert_eq!(u.ambient[0], 0.6);
    assert_eq!(u.shadow[0], 1.0 / 2048.0);
    assert_eq!(u.shadow[3], 1.0);
    assert_eq!(u.camera_pos[..3], camera.eye.to_array());
}

#[test]
fn post_encodes_srgb_only_for_linear_surfaces() {
    assert_eq!(post_uniforms(1.0, true).encode_srgb, 0.0);
    assert_eq!(post_uniforms(1.0, false).encode_srgb, 1.0);
    assert_eq!(post_uniforms(HDR_EXPOSURE, true).exposure, HDR_EXPOSURE);
}
