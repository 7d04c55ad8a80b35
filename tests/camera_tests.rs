// Host-side tests for the orbit camera and the sun's shadow frustum.

use glam::Vec3;
use raumplaner_core::*;
use std::f32::consts::PI;

fn rig() -> (Camera, OrbitControls) {
    let camera = Camera::apartment_default(16.0 / 9.0);
    let controls = OrbitControls::new(&camera);
    (camera, controls)
}

fn settle(controls: &mut OrbitControls, camera: &mut Camera, frames: usize) {
    for _ in 0..frames {
        controls.update(camera);
    }
}

#[test]
fn default_view_looks_at_the_origin_from_above() {
    let (camera, controls) = rig();
    assert_eq!(camera.target, Vec3::ZERO);
    assert!(camera.eye.y > 0.0);
    assert!((controls.distance() - camera.eye.length()).abs() < 1e-4);
    assert!(controls.polar_angle() < PI / 2.1);
}

#[test]
fn spherical_offset_round_trip() {
    for v in [
        Vec3::new(12.0, 9.0, 12.0),
        Vec3::new(-3.0, 1.0, 0.5),
        Vec3::new(0.0, 5.0, -7.0),
    ] {
        let back = Spherical::from_offset(v).to_offset();
        assert!((back - v).length() < 1e-4, "{v:?} -> {back:?}");
    }
}

#[test]
fn polar_angle_never_goes_below_the_horizon() {
    let (mut camera, mut controls) = rig();
    // drag far upward: pushes the eye down toward the floor
    controls.rotate(0.0, -10_000.0, 600.0);
    settle(&mut controls, &mut camera, 200);
    assert!(controls.polar_angle() <= PI / 2.1 + 1e-5);
    assert!(camera.eye.y > 0.0);
}

#[test]
fn polar_angle_stops_short_of_straight_down() {
    let (mut camera, mut controls) = rig();
    controls.rotate(0.0, 10_000.0, 600.0);
    settle(&mut controls, &mut camera, 200);
    assert!(controls.polar_angle() >= 0.01 - 1e-6);
}

#[test]
fn zoom_is_clamped_to_distance_range() {
    let (mut camera, mut controls) = rig();
    for _ in 0..200 {
        controls.zoom(-1.0);
        controls.update(&mut camera);
    }
    assert!((controls.distance() - 3.0).abs() < 1e-4);
    assert!(((camera.eye - camera.target).length() - 3.0).abs() < 1e-3);

    for _ in 0..400 {
        controls.zoom(1.0);
        controls.update(&mut camera);
    }
    assert!((controls.distance() - 60.0).abs() < 1e-3);
}

#[test]
fn zero_wheel_delta_is_ignored() {
    let (mut camera, mut controls) = rig();
    let before = controls.distance();
    controls.zoom(0.0);
    controls.update(&mut camera);
    assert_eq!(controls.distance(), before);
}

#[test]
fn rotation_is_damped_and_settles() {
    let (mut camera, mut controls) = rig();
    let theta0 = controls.spherical.theta;
    controls.rotate(100.0, 0.0, 500.0);
    assert!(controls.update(&mut camera));
    let full = 2.0 * PI * 100.0 / 500.0;
    let first_step = (controls.spherical.theta - theta0).abs();
    // only a fraction of the pending rotation applies per frame
    assert!((first_step - full * 0.05).abs() < 1e-4);

    settle(&mut controls, &mut camera, 1000);
    assert!(!controls.update(&mut camera));
    assert!(((controls.spherical.theta - theta0).abs() - full).abs() < 1e-2);
}

#[test]
fn pan_moves_the_target_and_keeps_the_distance() {
    let (mut camera, mut controls) = rig();
    let before = controls.distance();
    controls.pan(120.0, 40.0, 600.0, &camera);
    settle(&mut controls, &mut camera, 500);
    assert!(camera.target.length() > 0.1);
    assert!(((camera.eye - camera.target).length() - before).abs() < 1e-3);
}

#[test]
fn viewport_sets_aspect() {
    let mut camera = Camera::apartment_default(1.0);
    camera.set_viewport(1200, 600);
    assert_eq!(camera.aspect, 2.0);
    camera.set_viewport(800, 0);
    assert_eq!(camera.aspect, 800.0);
}

#[test]
fn shadow_frustum_covers_the_scene() {
    let mut store = ConfigStore::default();
    store.set_dimension(Dimension::Length, 20.0);
    store.set_dimension(Dimension::Width, 14.0);
    store.set_dimension(Dimension::WallHeight, 4.2);
    let scene = SceneDescription::from_config(store.config());
    let (lo, hi) = scene.bounds();
    let lvp = light_view_projection(&scene.lighting, (lo, hi));
    for i in 0..8 {
        let corner = Vec3::new(
            if i & 1 == 0 { lo.x } else { hi.x },
            if i & 2 == 0 { lo.y } else { hi.y },
            if i & 4 == 0 { lo.z } else { hi.z },
        );
        let p = lvp.project_point3(corner);
        assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0, "{corner:?} -> {p:?}");
        assert!((0.0..=1.0).contains(&p.z), "{corner:?} depth {}", p.z);
    }
}
